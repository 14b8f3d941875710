//! Employee form state management.
//!
//! This module holds the editable draft behind the employee form, the
//! field focus order, and the masking rules applied on every edit. The
//! draft is re-seeded only through [`FormState::reset`], which the
//! controller calls whenever the seed derived from the selection changes.

use roster_protocol::format::{
    color_to_background_class_safe, color_to_hover_class, to_alphabetic, to_grouped_numeric,
    to_numeric,
};
use roster_protocol::{Employee, Gender, ProfileColor, Salutation};

/// Fields of the employee form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    /// First name(s) text input.
    #[default]
    FirstName,
    /// Last name text input.
    LastName,
    /// Salutation choice.
    Salutation,
    /// Gender choice (editable only for `Dr`).
    Gender,
    /// Employee id text input (digits only).
    EmployeeId,
    /// Gross salary text input (grouped digits).
    GrossSalary,
    /// Profile color choice.
    ProfileColor,
    /// Cancel button.
    Cancel,
    /// Save button.
    Save,
}

impl FormField {
    /// Returns all fields in focus order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Salutation,
            Self::Gender,
            Self::EmployeeId,
            Self::GrossSalary,
            Self::ProfileColor,
            Self::Cancel,
            Self::Save,
        ]
    }

    /// Returns the next field in focus order (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// Returns the previous field in focus order (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: isize) -> Self {
        let all = Self::all();
        let len = all.len() as isize;
        let idx = all.iter().position(|f| *f == self).unwrap_or(0) as isize;
        all[(idx + delta).rem_euclid(len) as usize]
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name(s) *",
            Self::LastName => "Last Name *",
            Self::Salutation => "Salutation *",
            Self::Gender => "Gender *",
            Self::EmployeeId => "Employee Id *",
            Self::GrossSalary => "Gross Salary $PY",
            Self::ProfileColor => "Employee Profile Color",
            Self::Cancel => "Cancel",
            Self::Save => "Save",
        }
    }

    /// Returns `true` for free-text inputs.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::EmployeeId | Self::GrossSalary
        )
    }

    /// Returns `true` for closed-choice inputs.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Salutation | Self::Gender | Self::ProfileColor)
    }

    /// Returns `true` for the form buttons.
    #[must_use]
    pub fn is_button(self) -> bool {
        matches!(self, Self::Cancel | Self::Save)
    }
}

/// The editable values of the form.
///
/// Text values are stored already masked; numeric fields stay text until
/// [`FormState::to_employee`] converts them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    /// First name(s), alphabetic only.
    pub first_name: String,
    /// Last name, alphabetic only.
    pub last_name: String,
    /// Employee id, digits only.
    pub employee_id: String,
    /// Gross salary, digits grouped by three.
    pub gross_salary: String,
    /// Salutation.
    pub salutation: Salutation,
    /// Gender.
    pub gender: Gender,
    /// Profile color.
    pub color: ProfileColor,
}

impl EmployeeDraft {
    /// Returns the add-new template: empty text, `Mr`, male, default color.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Seeds a draft from an existing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_protocol::{Employee, Gender, ProfileColor, Salutation};
    /// use roster_tui::form_state::EmployeeDraft;
    ///
    /// let employee = Employee {
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     employee_id: 7,
    ///     gross_salary: 1234567,
    ///     salutation: Salutation::Dr,
    ///     gender: Gender::F,
    ///     color: ProfileColor::Blue,
    /// };
    ///
    /// let draft = EmployeeDraft::from_employee(&employee);
    /// assert_eq!(draft.employee_id, "7");
    /// assert_eq!(draft.gross_salary, "1 234 567");
    /// ```
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            employee_id: employee.employee_id.to_string(),
            gross_salary: to_grouped_numeric(&employee.gross_salary.to_string()),
            salutation: employee.salutation,
            gender: employee.gender,
            color: employee.color,
        }
    }
}

/// Errors raised when converting the draft into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required numeric field is empty.
    #[error("{field} is required")]
    Missing {
        /// The field label.
        field: &'static str,
    },

    /// A numeric field does not fit the record.
    #[error("{field} is too large: {value}")]
    OutOfRange {
        /// The field label.
        field: &'static str,
        /// The offending text.
        value: String,
    },
}

/// State of the employee form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// The seed the draft was last reset to.
    original: EmployeeDraft,
    /// The live values.
    draft: EmployeeDraft,
    /// The focused field.
    focused: FormField,
}

impl FormState {
    /// Creates a form seeded with `seed`.
    #[must_use]
    pub fn new(seed: EmployeeDraft) -> Self {
        Self {
            original: seed.clone(),
            draft: seed,
            focused: FormField::default(),
        }
    }

    /// Replaces the seed and discards every edit.
    ///
    /// Focus is kept so that reseeding from a refetch does not move the
    /// cursor.
    pub fn reset(&mut self, seed: EmployeeDraft) {
        self.draft = seed.clone();
        self.original = seed;
    }

    /// Restores every field to the current seed.
    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
    }

    /// Returns the seed.
    #[must_use]
    pub fn original(&self) -> &EmployeeDraft {
        &self.original
    }

    /// Returns the live values.
    #[must_use]
    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Returns whether the draft differs from its seed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focused(&self) -> FormField {
        self.focused
    }

    /// Focuses `field`.
    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Returns the stored text of a text field.
    #[must_use]
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FirstName => Some(&self.draft.first_name),
            FormField::LastName => Some(&self.draft.last_name),
            FormField::EmployeeId => Some(&self.draft.employee_id),
            FormField::GrossSalary => Some(&self.draft.gross_salary),
            _ => None,
        }
    }

    /// Stores `raw` into a text field after applying the field's mask.
    ///
    /// Non-text fields are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_tui::form_state::{EmployeeDraft, FormField, FormState};
    ///
    /// let mut form = FormState::new(EmployeeDraft::blank());
    /// form.set_text(FormField::FirstName, "J0hn");
    /// form.set_text(FormField::GrossSalary, "1234567");
    /// assert_eq!(form.draft().first_name, "John");
    /// assert_eq!(form.draft().gross_salary, "1 234 567");
    /// ```
    pub fn set_text(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::FirstName => self.draft.first_name = to_alphabetic(raw),
            FormField::LastName => self.draft.last_name = to_alphabetic(raw),
            FormField::EmployeeId => self.draft.employee_id = to_numeric(raw),
            FormField::GrossSalary => self.draft.gross_salary = to_grouped_numeric(raw),
            _ => {}
        }
    }

    /// Appends a character to the focused text field.
    pub fn input_char(&mut self, ch: char) {
        let field = self.focused;
        if let Some(current) = self.text(field) {
            let mut raw = current.to_string();
            raw.push(ch);
            self.set_text(field, &raw);
        }
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) {
        let field = self.focused;
        if let Some(current) = self.text(field) {
            let mut raw = current.to_string();
            raw.pop();
            self.set_text(field, &raw);
        }
    }

    /// Sets the salutation and the gender it implies.
    pub fn set_salutation(&mut self, salutation: Salutation) {
        self.draft.salutation = salutation;
        if let Some(gender) = salutation.implied_gender() {
            self.draft.gender = gender;
        }
    }

    /// Returns whether the gender can be chosen freely.
    #[must_use]
    pub fn gender_editable(&self) -> bool {
        self.draft.salutation.implied_gender().is_none()
    }

    /// Sets the gender when it is editable.
    ///
    /// Returns `false` and leaves the draft unchanged otherwise.
    pub fn set_gender(&mut self, gender: Gender) -> bool {
        if !self.gender_editable() {
            return false;
        }
        self.draft.gender = gender;
        true
    }

    /// Sets the profile color.
    pub fn set_color(&mut self, color: ProfileColor) {
        self.draft.color = color;
    }

    /// Cycles the focused choice field by `delta` steps.
    pub fn cycle_choice(&mut self, delta: i32) {
        let forward = delta >= 0;
        for _ in 0..delta.unsigned_abs() {
            match self.focused {
                FormField::Salutation => {
                    let s = self.draft.salutation;
                    self.set_salutation(if forward { s.next() } else { s.prev() });
                }
                FormField::Gender => {
                    let g = self.draft.gender;
                    if !self.set_gender(if forward { g.next() } else { g.prev() }) {
                        return;
                    }
                }
                FormField::ProfileColor => {
                    let c = self.draft.color;
                    self.set_color(if forward { c.next() } else { c.prev() });
                }
                _ => return,
            }
        }
    }

    /// Returns `"<first> <last>"` of the live draft.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.draft.first_name, self.draft.last_name)
    }

    /// Returns the Save button classes for the draft's color.
    #[must_use]
    pub fn save_button_classes(&self) -> String {
        Self::save_button_classes_for(self.draft.color.as_str())
    }

    /// Returns the Save button classes for an arbitrary color code.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_tui::form_state::FormState;
    ///
    /// assert_eq!(
    ///     FormState::save_button_classes_for("RED"),
    ///     "mx-2 px-4 rounded bg-red-400 hover:bg-red-400 text-white"
    /// );
    /// assert_eq!(
    ///     FormState::save_button_classes_for("PURPLE"),
    ///     "mx-2 px-4 rounded bg-gray-300"
    /// );
    /// ```
    #[must_use]
    pub fn save_button_classes_for(code: &str) -> String {
        let light_text = matches!(code, "GREEN" | "BLUE" | "RED");
        let classes = [
            "mx-2 px-4 rounded",
            color_to_background_class_safe(code),
            color_to_hover_class(code),
            if light_text { "text-white" } else { "" },
        ];

        classes
            .iter()
            .filter(|class| !class.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Converts the draft into the record to submit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the employee id or salary is empty or does
    /// not fit an unsigned 64-bit integer.
    pub fn to_employee(&self) -> Result<Employee, FormError> {
        Ok(Employee {
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            employee_id: parse_number(FormField::EmployeeId, &self.draft.employee_id)?,
            gross_salary: parse_number(FormField::GrossSalary, &self.draft.gross_salary)?,
            salutation: self.draft.salutation,
            gender: self.draft.gender,
            color: self.draft.color,
        })
    }
}

fn parse_number(field: FormField, text: &str) -> Result<u64, FormError> {
    let name = field.label().trim_end_matches(" *");
    let digits = to_numeric(text);
    if digits.is_empty() {
        return Err(FormError::Missing { field: name });
    }
    digits.parse().map_err(|_| FormError::OutOfRange {
        field: name,
        value: text.to_string(),
    })
}

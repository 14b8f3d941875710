//! Employee records and their enumerations.
//!
//! The [`Employee`] struct mirrors the JSON record exchanged with the
//! employee-collection endpoint. Field names are camelCase on the wire and
//! enumerations travel as their upper-case codes.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProtocolError, Result};
use crate::format::capitalize_enum;

/// An honorific, which constrains or implies the employee's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Salutation {
    /// Mr. (implies male).
    #[default]
    Mr,
    /// Ms. (implies female).
    Ms,
    /// Mrs. (implies female).
    Mrs,
    /// Dr. (gender chosen freely).
    Dr,
    /// Mx. (implies unspecified).
    Mx,
}

impl Salutation {
    /// Returns all salutations in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Mr, Self::Ms, Self::Mrs, Self::Dr, Self::Mx]
    }

    /// Returns the wire code (e.g. `"MRS"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mr => "MR",
            Self::Ms => "MS",
            Self::Mrs => "MRS",
            Self::Dr => "DR",
            Self::Mx => "MX",
        }
    }

    /// Returns the display label with its trailing period (e.g. `"Mrs."`).
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_protocol::Salutation;
    ///
    /// assert_eq!(Salutation::Mrs.label(), "Mrs.");
    /// assert_eq!(Salutation::Dr.label(), "Dr.");
    /// ```
    #[must_use]
    pub fn label(self) -> String {
        let mut label = capitalize_enum(self.as_str()).unwrap_or_default();
        label.push('.');
        label
    }

    /// Returns the gender implied by this salutation, if any.
    ///
    /// `Dr` implies nothing, which leaves the gender open to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_protocol::{Gender, Salutation};
    ///
    /// assert_eq!(Salutation::Mx.implied_gender(), Some(Gender::U));
    /// assert_eq!(Salutation::Dr.implied_gender(), None);
    /// ```
    #[must_use]
    pub const fn implied_gender(self) -> Option<Gender> {
        match self {
            Self::Mr => Some(Gender::M),
            Self::Ms | Self::Mrs => Some(Gender::F),
            Self::Mx => Some(Gender::U),
            Self::Dr => None,
        }
    }

    /// Returns the next salutation in display order (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        cycle(Self::all(), self, 1)
    }

    /// Returns the previous salutation in display order (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        cycle(Self::all(), self, -1)
    }
}

/// The employee's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    /// Male.
    #[default]
    M,
    /// Female.
    F,
    /// Unspecified.
    U,
}

impl Gender {
    /// Returns all genders in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::M, Self::F, Self::U]
    }

    /// Returns the wire code (e.g. `"F"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::U => "U",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::M => "Male",
            Self::F => "Female",
            Self::U => "Unspecified",
        }
    }

    /// Returns the next gender in display order (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        cycle(Self::all(), self, 1)
    }

    /// Returns the previous gender in display order (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        cycle(Self::all(), self, -1)
    }
}

/// A cosmetic tag used to highlight an employee's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProfileColor {
    /// Green highlight.
    Green,
    /// Blue highlight.
    Blue,
    /// Red highlight.
    Red,
    /// No special highlight.
    #[default]
    Default,
}

impl ProfileColor {
    /// Returns all colors in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Green, Self::Blue, Self::Red, Self::Default]
    }

    /// Returns the wire code (e.g. `"GREEN"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Red => "RED",
            Self::Default => "DEFAULT",
        }
    }

    /// Returns the display label (e.g. `"Green"`).
    #[must_use]
    pub fn label(self) -> String {
        capitalize_enum(self.as_str()).unwrap_or_default()
    }

    /// Returns the next color in display order (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        cycle(Self::all(), self, 1)
    }

    /// Returns the previous color in display order (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        cycle(Self::all(), self, -1)
    }
}

/// Steps through a closed list of choices, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: isize) -> T {
    let len = all.len() as isize;
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
    all[(idx + delta).rem_euclid(len) as usize]
}

macro_rules! impl_code_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ProtocolError;

            fn from_str(s: &str) -> Result<Self> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ProtocolError::UnknownVariant {
                        kind: $kind,
                        code: s.to_string(),
                    })
            }
        }
    };
}

impl_code_traits!(Salutation, "salutation");
impl_code_traits!(Gender, "gender");
impl_code_traits!(ProfileColor, "color");

/// An employee record as exchanged with the employee-collection endpoint.
///
/// # Examples
///
/// ```
/// use roster_protocol::{Employee, Gender, ProfileColor, Salutation};
///
/// let json = r#"{
///     "firstName": "Ada",
///     "lastName": "Lovelace",
///     "employeeId": 7,
///     "grossSalary": 120000,
///     "salutation": "DR",
///     "gender": "F",
///     "color": "BLUE"
/// }"#;
///
/// let employee: Employee = serde_json::from_str(json).unwrap();
/// assert_eq!(employee.salutation, Salutation::Dr);
/// assert_eq!(employee.gender, Gender::F);
/// assert_eq!(employee.color, ProfileColor::Blue);
/// assert_eq!(employee.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// First name(s).
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Positive identifier assigned by the organisation.
    #[serde(deserialize_with = "whole_number")]
    pub employee_id: u64,
    /// Gross yearly salary, in whole currency units.
    ///
    /// Fractional amounts on the wire keep their integer part.
    #[serde(deserialize_with = "whole_number")]
    pub gross_salary: u64,
    /// Honorific.
    pub salutation: Salutation,
    /// Gender, implied by the salutation unless it is `Dr`.
    pub gender: Gender,
    /// Highlight color.
    pub color: ProfileColor,
}

impl Employee {
    /// Returns `"<first> <last>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Accepts any non-negative JSON number, dropping a fractional part.
///
/// Backends that model amounts as floating point send `85000.0` where an
/// integer is meant.
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumber;

    impl Visitor<'_> for WholeNumber {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative number")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<u64, E> {
            u64::try_from(value)
                .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<u64, E> {
            if value.is_finite() && (0.0..=u64::MAX as f64).contains(&value) {
                Ok(value.trunc() as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

//! Enumerated tokens stored in the `status` and `priority` columns.
//!
//! Each variant maps to exactly one lowercase, case-sensitive token. The
//! token is what SQLite stores and what the JSON API emits.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CoreError;

macro_rules! define_token_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every valid token, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Convert to the stored token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }

            /// Parse a stored token. Matching is case-sensitive.
            pub fn from_str_value(s: &str) -> Result<Self, String> {
                match s {
                    $( $token => Ok(Self::$variant), )+
                    _ => Err(format!(
                        "Invalid {} '{s}'. Must be one of: {}",
                        $label,
                        Self::TOKENS.join(", ")
                    )),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str_value(s)
            }
        }

        /// Used when decoding rows; an unknown token surfaces as a column decode error.
        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_str_value(&value).map_err(CoreError::Validation)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

define_token_enum! {
    /// Project lifecycle status.
    ProjectStatus ("project status") default Active {
        Active = "active",
        Planning = "planning",
        OnHold = "on_hold",
        Completed = "completed",
        Cancelled = "cancelled",
    }
}

define_token_enum! {
    /// Task workflow status.
    TaskStatus ("task status") default Todo {
        Todo = "todo",
        InProgress = "in_progress",
        Completed = "completed",
    }
}

define_token_enum! {
    /// Task priority.
    TaskPriority ("task priority") default Medium {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_schema_defaults() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn task_status_tokens_parse() {
        assert_eq!(
            TaskStatus::from_str_value("in_progress").unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            TaskStatus::from_str_value("completed").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert!(ProjectStatus::from_str_value("Active").is_err());
        assert!(TaskPriority::from_str_value("HIGH").is_err());
    }

    #[test]
    fn invalid_token_error_lists_valid_values() {
        let err = TaskPriority::from_str_value("urgent").unwrap_err();
        assert!(err.contains("urgent"));
        assert!(err.contains("low, medium, high"));
    }

    #[test]
    fn every_token_round_trips_through_as_str() {
        for token in ProjectStatus::TOKENS {
            assert_eq!(ProjectStatus::from_str_value(token).unwrap().as_str(), *token);
        }
    }

    #[test]
    fn try_from_string_maps_to_validation_error() {
        assert_eq!(
            ProjectStatus::try_from("on_hold".to_string()).unwrap(),
            ProjectStatus::OnHold
        );
        let err = TaskStatus::try_from("done".to_string()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn serializes_as_bare_token() {
        let json = serde_json::to_value(TaskStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!("in_progress"));
    }
}

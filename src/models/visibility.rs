//! Problem visibility

use serde::{Deserialize, Serialize};

/// Who may see a problem without special permissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Visibility {
    #[default]
    Private = 0,
    Public = 1,
}

impl Visibility {
    /// Every visibility, in stored-value order
    pub const ALL: [Visibility; 2] = [Visibility::Private, Visibility::Public];

    /// Human-readable label shown in problem forms
    pub const fn label(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }

    pub const fn value(self) -> i16 {
        self as i16
    }

    pub fn from_value(value: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<(i16, &str)> = Visibility::ALL
            .iter()
            .map(|v| (v.value(), v.label()))
            .collect();
        assert_eq!(labels, vec![(0, "private"), (1, "public")]);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Visibility::from_value(1), Some(Visibility::Public));
        assert_eq!(Visibility::from_value(0), Some(Visibility::Private));
        assert_eq!(Visibility::from_value(2), None);
    }
}

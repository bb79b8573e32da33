//! Basic types for the transaction view

use serde::{Deserialize, Serialize};

/// Visual class applied to a rendered amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountClass {
    /// Non-negative amounts
    Positivo,
    /// Negative amounts
    Negativo,
}

impl AmountClass {
    /// Classify an amount by its sign
    pub fn from_valor(valor: f64) -> Self {
        if valor < 0.0 {
            AmountClass::Negativo
        } else {
            AmountClass::Positivo
        }
    }

    /// CSS class name used by the row templates
    pub fn css_class(&self) -> &'static str {
        match self {
            AmountClass::Positivo => "positivo",
            AmountClass::Negativo => "negativo",
        }
    }
}

impl std::fmt::Display for AmountClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

/// User-initiated actions on a rendered row
///
/// Every rendered control carries exactly one of these, together with the
/// owning transaction id. The renderer dispatches over this enum in a single
/// place, so the mapping from action to request lives nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Swap the row for an inline edit form
    Edit,
    /// Delete the transaction after confirmation
    Delete,
    /// Submit the inline edit form
    SaveEdit,
    /// Discard the inline edit and reload the list
    CancelEdit,
}

impl RowAction {
    pub const ALL: [RowAction; 4] = [
        RowAction::Edit,
        RowAction::Delete,
        RowAction::SaveEdit,
        RowAction::CancelEdit,
    ];

    /// Marker class carried by the rendered control
    pub fn marker_class(&self) -> &'static str {
        match self {
            RowAction::Edit => "edit-btn",
            RowAction::Delete => "delete-btn",
            RowAction::SaveEdit => "save-edit-btn",
            RowAction::CancelEdit => "cancel-edit-btn",
        }
    }
}

impl std::str::FromStr for RowAction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit-btn" => Ok(RowAction::Edit),
            "delete-btn" => Ok(RowAction::Delete),
            "save-edit-btn" => Ok(RowAction::SaveEdit),
            "cancel-edit-btn" => Ok(RowAction::CancelEdit),
            _ => Err(format!("Invalid row action: {}", s)),
        }
    }
}

impl std::fmt::Display for RowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker_class())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_amount_class_boundaries() {
        assert_eq!(AmountClass::from_valor(1000.0), AmountClass::Positivo);
        assert_eq!(AmountClass::from_valor(0.0), AmountClass::Positivo);
        assert_eq!(AmountClass::from_valor(-4.5), AmountClass::Negativo);
    }

    #[test]
    fn test_amount_class_css() {
        assert_eq!(AmountClass::Positivo.css_class(), "positivo");
        assert_eq!(AmountClass::Negativo.css_class(), "negativo");
    }

    #[test]
    fn test_row_action_marker_classes() {
        assert_eq!(RowAction::Edit.marker_class(), "edit-btn");
        assert_eq!(RowAction::Delete.marker_class(), "delete-btn");
        assert_eq!(RowAction::SaveEdit.marker_class(), "save-edit-btn");
        assert_eq!(RowAction::CancelEdit.marker_class(), "cancel-edit-btn");
    }

    #[test]
    fn test_row_action_round_trip() {
        for action in RowAction::ALL {
            assert_eq!(RowAction::from_str(action.marker_class()), Ok(action));
        }
        assert!(RowAction::from_str("other-btn").is_err());
    }
}

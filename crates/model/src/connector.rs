//! Connector records
//!
//! The UI shape of a connector part plus the draft edited by the connector
//! form. A connector's id is optional because legacy rows may predate
//! surrogate ids; such rows can be listed but not updated or deleted.

use parts_admin_core::{AdminError, AdminResult, ConnectorId, EntityKind, Record, Validatable};
use serde::{Deserialize, Serialize};

use crate::attachment::{AttachmentSlot, Attachments, UploadedPaths};
use crate::form::Draftable;

/// Placeholder shown for absent values
pub const EMPTY_CELL: &str = "—";

/// Render a price as `$x.xx`, or the empty-cell marker when absent
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => EMPTY_CELL.to_string(),
    }
}

// ============================================================================
// Connector
// ============================================================================

/// A connector part as shown in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Backend-assigned id, absent on legacy rows
    #[serde(default)]
    pub id: Option<ConnectorId>,

    /// Unique natural key, shown but never used to address the record
    #[serde(rename = "yazakiPN")]
    pub yazaki_pn: String,

    #[serde(rename = "customerPN")]
    pub customer_pn: String,

    #[serde(rename = "supplierPN")]
    pub supplier_pn: String,

    #[serde(rename = "supplierName")]
    pub supplier_name: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub drawing_2d_path: Option<String>,

    #[serde(default)]
    pub model_3d_path: Option<String>,

    #[serde(default)]
    pub image_path: Option<String>,
}

impl Connector {
    /// Create a connector with the four required part numbers
    pub fn new(
        yazaki_pn: impl Into<String>,
        customer_pn: impl Into<String>,
        supplier_pn: impl Into<String>,
        supplier_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            yazaki_pn: yazaki_pn.into(),
            customer_pn: customer_pn.into(),
            supplier_pn: supplier_pn.into(),
            supplier_name: supplier_name.into(),
            name: None,
            price: None,
            drawing_2d_path: None,
            model_3d_path: None,
            image_path: None,
        }
    }

    /// Builder method to set the id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(ConnectorId(id));
        self
    }

    /// Builder method to set the descriptive name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Price cell text
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Stored path for an attachment slot
    pub fn path_for(&self, slot: AttachmentSlot) -> Option<&str> {
        match slot {
            AttachmentSlot::Image => self.image_path.as_deref(),
            AttachmentSlot::Drawing2d => self.drawing_2d_path.as_deref(),
            AttachmentSlot::Model3d => self.model_3d_path.as_deref(),
        }
    }
}

impl Record for Connector {
    type Id = ConnectorId;

    const KIND: EntityKind = EntityKind::Connector;

    fn id(&self) -> Option<ConnectorId> {
        self.id
    }

    fn natural_key(&self) -> String {
        self.yazaki_pn.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.yazaki_pn, &self.customer_pn, &self.supplier_pn]
    }

    fn filter_value(&self) -> &str {
        &self.supplier_name
    }
}

// ============================================================================
// Connector Draft
// ============================================================================

/// Editable fields of a connector
///
/// Fields are kept as entered text and the price is parsed only when the
/// draft is turned into a record. A draft opened from a stored connector
/// remembers it: fields left untouched are sent back exactly as stored,
/// while edited fields are trimmed and blank optional fields become `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorDraft {
    pub yazaki_pn: String,
    pub customer_pn: String,
    pub supplier_pn: String,
    pub supplier_name: String,
    pub name: String,
    pub price: String,
    pub drawing_2d_path: String,
    pub model_3d_path: String,
    pub image_path: String,
    pub attachments: Attachments,
    stored: Option<Connector>,
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text shown in the price input for a stored price
fn price_text(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Stored value when `entered` is unchanged, trimmed text otherwise
fn required_field(entered: &str, stored: Option<&String>) -> String {
    match stored {
        Some(stored) if stored == entered => stored.clone(),
        _ => entered.trim().to_string(),
    }
}

/// Stored value when `entered` is unchanged, [`optional`] otherwise
fn optional_field(entered: &str, stored: Option<&Option<String>>) -> Option<String> {
    match stored {
        Some(stored) if stored.as_deref().unwrap_or_default() == entered => stored.clone(),
        _ => optional(entered),
    }
}

impl ConnectorDraft {
    /// Parsed price, `Ok(None)` when left blank
    pub fn parsed_price(&self) -> AdminResult<Option<f64>> {
        let text = self.price.trim().trim_start_matches('$');
        if text.is_empty() {
            return Ok(None);
        }
        let value: f64 = text
            .parse()
            .map_err(|_| AdminError::InvalidDraft(vec![format!("'{}' is not a price", text)]))?;
        if !value.is_finite() || value < 0.0 {
            return Err(AdminError::InvalidDraft(vec![
                "Price must be zero or more".to_string(),
            ]));
        }
        Ok(Some(value))
    }

    /// Connector this draft was opened from, `None` for a new one
    pub fn stored(&self) -> Option<&Connector> {
        self.stored.as_ref()
    }

    /// Build the record to send, keeping `id` from the record being edited
    pub fn to_connector(&self, id: Option<ConnectorId>) -> AdminResult<Connector> {
        self.validate()?;
        let stored = self.stored.as_ref();

        let price = match stored {
            Some(c) if price_text(c.price) == self.price => c.price,
            _ => self.parsed_price()?,
        };

        Ok(Connector {
            id,
            yazaki_pn: required_field(&self.yazaki_pn, stored.map(|c| &c.yazaki_pn)),
            customer_pn: required_field(&self.customer_pn, stored.map(|c| &c.customer_pn)),
            supplier_pn: required_field(&self.supplier_pn, stored.map(|c| &c.supplier_pn)),
            supplier_name: required_field(&self.supplier_name, stored.map(|c| &c.supplier_name)),
            name: optional_field(&self.name, stored.map(|c| &c.name)),
            price,
            drawing_2d_path: optional_field(
                &self.drawing_2d_path,
                stored.map(|c| &c.drawing_2d_path),
            ),
            model_3d_path: optional_field(&self.model_3d_path, stored.map(|c| &c.model_3d_path)),
            image_path: optional_field(&self.image_path, stored.map(|c| &c.image_path)),
        })
    }

    /// Write uploaded paths into the matching path fields
    ///
    /// Slots without an uploaded path keep their current value.
    pub fn apply_uploaded(&mut self, uploaded: &UploadedPaths) {
        for (slot, path) in uploaded {
            let field = match slot {
                AttachmentSlot::Image => &mut self.image_path,
                AttachmentSlot::Drawing2d => &mut self.drawing_2d_path,
                AttachmentSlot::Model3d => &mut self.model_3d_path,
            };
            *field = path.clone();
        }
    }

    /// Base file name sent with uploads
    pub fn upload_base_name(&self) -> String {
        self.yazaki_pn
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect()
    }
}

impl Validatable for ConnectorDraft {
    fn validate(&self) -> AdminResult<()> {
        let mut errors = Vec::new();

        let required = [
            ("Yazaki PN", &self.yazaki_pn),
            ("Customer PN", &self.customer_pn),
            ("Supplier PN", &self.supplier_pn),
            ("Supplier name", &self.supplier_name),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                errors.push(format!("{} is required", label));
            }
        }

        if let Err(AdminError::InvalidDraft(mut price_errors)) = self.parsed_price() {
            errors.append(&mut price_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AdminError::InvalidDraft(errors))
        }
    }
}

impl From<&Connector> for ConnectorDraft {
    fn from(c: &Connector) -> Self {
        Self {
            yazaki_pn: c.yazaki_pn.clone(),
            customer_pn: c.customer_pn.clone(),
            supplier_pn: c.supplier_pn.clone(),
            supplier_name: c.supplier_name.clone(),
            name: c.name.clone().unwrap_or_default(),
            price: price_text(c.price),
            drawing_2d_path: c.drawing_2d_path.clone().unwrap_or_default(),
            model_3d_path: c.model_3d_path.clone().unwrap_or_default(),
            image_path: c.image_path.clone().unwrap_or_default(),
            attachments: Attachments::new(),
            stored: Some(c.clone()),
        }
    }
}

impl Draftable for Connector {
    type Draft = ConnectorDraft;

    fn to_draft(&self) -> ConnectorDraft {
        ConnectorDraft::from(self)
    }

    fn lock_key(&self, draft: &mut ConnectorDraft) {
        draft.yazaki_pn = self.yazaki_pn.clone();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_connector_ui_shape() {
        let c = Connector::new("A1", "C1", "S1", "Acme").with_id(5).with_price(10.0);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["yazakiPN"], "A1");
        assert_eq!(json["supplierName"], "Acme");
        assert_eq!(json["id"], 5);
        assert!(json["image_path"].is_null());
    }

    #[test]
    fn test_legacy_row_without_id() {
        let c: Connector = serde_json::from_str(
            r#"{"yazakiPN":"A1","customerPN":"C1","supplierPN":"S1","supplierName":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(c.id(), None);
        assert_eq!(c.natural_key(), "A1");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(format_price(Some(10.0)), "$10.00");
        assert_eq!(format_price(Some(3.456)), "$3.46");
        assert_eq!(format_price(None), "—");
    }

    #[test]
    fn test_draft_requires_part_numbers() {
        let errors = ConnectorDraft::default().validation_errors();
        assert_eq!(
            errors,
            vec![
                "Yazaki PN is required",
                "Customer PN is required",
                "Supplier PN is required",
                "Supplier name is required",
            ]
        );
    }

    #[test]
    fn test_draft_price_parsing() {
        let mut draft = ConnectorDraft::from(&Connector::new("A1", "C1", "S1", "Acme"));
        assert_eq!(draft.parsed_price().unwrap(), None);

        draft.price = "$12.5".to_string();
        assert_eq!(draft.parsed_price().unwrap(), Some(12.5));

        draft.price = "-1".to_string();
        assert!(!draft.is_valid());

        draft.price = "abc".to_string();
        assert!(draft.to_connector(None).unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_round_trip_keeps_id_and_nulls() {
        let original = Connector::new("A1", "C1", "S1", "Acme")
            .with_id(9)
            .with_name("Housing")
            .with_price(2.25);
        let rebuilt = original.to_draft().to_connector(original.id).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_unchanged_draft_returns_stored_values() {
        let mut original = Connector::new(" A1", "C1 ", "S1", "Acme")
            .with_id(9)
            .with_price(0.1 + 0.2);
        original.name = Some(String::new());
        original.drawing_2d_path = Some("  ".to_string());
        original.image_path = Some("/images/A1.png".to_string());

        let rebuilt = original.to_draft().to_connector(original.id).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_edited_fields_are_normalized() {
        let mut original = Connector::new("A1", "C1", "S1", "Acme").with_id(9);
        original.name = Some(String::new());
        original.image_path = Some("/images/A1.png".to_string());

        let mut draft = original.to_draft();
        draft.customer_pn = " C2 ".to_string();
        draft.image_path = "   ".to_string();
        draft.price = "$4".to_string();
        let rebuilt = draft.to_connector(original.id).unwrap();

        assert_eq!(rebuilt.customer_pn, "C2");
        assert_eq!(rebuilt.image_path, None);
        assert_eq!(rebuilt.price, Some(4.0));
        assert_eq!(rebuilt.name, Some(String::new()));
    }

    #[test]
    fn test_new_draft_turns_blanks_into_none() {
        let mut draft = ConnectorDraft::default();
        draft.yazaki_pn = " A1 ".to_string();
        draft.customer_pn = "C1".to_string();
        draft.supplier_pn = "S1".to_string();
        draft.supplier_name = "Acme".to_string();
        draft.name = "  ".to_string();

        let built = draft.to_connector(None).unwrap();
        assert_eq!(built, Connector::new("A1", "C1", "S1", "Acme"));
        assert!(draft.stored().is_none());
    }

    #[test]
    fn test_apply_uploaded_paths() {
        let mut draft = ConnectorDraft::from(&Connector::new("A 1/x", "C1", "S1", "Acme"));
        draft.drawing_2d_path = "/old.pdf".to_string();

        let mut uploaded = UploadedPaths::new();
        uploaded.insert(AttachmentSlot::Image, "/images/A_1_x.png".to_string());
        draft.apply_uploaded(&uploaded);

        assert_eq!(draft.image_path, "/images/A_1_x.png");
        assert_eq!(draft.drawing_2d_path, "/old.pdf");
        assert_eq!(draft.upload_base_name(), "A_1_x");
    }

    #[test]
    fn test_lock_key_restores_natural_key() {
        let original = Connector::new("A1", "C1", "S1", "Acme").with_id(1);
        let mut draft = original.to_draft();
        draft.yazaki_pn = "CHANGED".to_string();
        original.lock_key(&mut draft);
        assert_eq!(draft.yazaki_pn, "A1");
    }
}

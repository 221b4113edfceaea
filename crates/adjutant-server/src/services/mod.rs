//! Mock backends standing in for the real integrations.

pub mod gmail;
pub mod odoo;

use uuid::Uuid;

/// Derives a stable mock identifier from the request fields.
///
/// UUIDv5 over a fixed namespace: identical payloads get identical ids, so
/// repeated calls stay idempotent, while different payloads diverge.
pub fn mock_id(parts: &[&str]) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, parts.join("\n").as_bytes())
}

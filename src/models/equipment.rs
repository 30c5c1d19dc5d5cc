use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentRecord {
    pub key: String,
    pub manufacturer: String,
}

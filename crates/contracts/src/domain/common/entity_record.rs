/// Identifier of every record exposed by the backend.
pub type EntityId = i64;

/// Serde default for the `ativo` flag: records that omit it are active.
pub fn default_ativo() -> bool {
    true
}

/// Trait implemented by every list entity
///
/// Instance accessors read the data of one record; the associated functions
/// describe the collection (REST path segment and UI names).
pub trait EntityRecord {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Stable unique id
    fn id(&self) -> EntityId;

    /// Soft enable/disable flag
    fn ativo(&self) -> bool;

    /// Human readable label used in joins and confirmation dialogs
    fn label(&self) -> String;

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// Index of the entity in the system (e.g. "a001")
    fn entity_index() -> &'static str;

    /// REST collection segment (e.g. "escolas")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Escola")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Escolas")
    fn list_name() -> &'static str;

    /// Full name used for page ids (e.g. "a001_escola")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }

    /// REST path of the collection (e.g. "/api/escolas")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}

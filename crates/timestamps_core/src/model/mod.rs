//! Embeddable lifecycle timestamp containers.
//!
//! # Responsibility
//! - Provide `Timestamps` (created/updated/deleted) and `Duration`
//!   (started/ended) for host record types to embed by value.
//! - Expose every field through the shared layout accessor family.
//!
//! # Invariants
//! - Fields are independent; no ordering between them is validated.
//! - Deletion is represented by the `deleted_at` tombstone, not hard delete.
//! - "Load defaults" only fills absent fields; "touch" always overwrites.

mod accessors;
pub mod duration;
pub mod timestamps;

//! Pharmaceutical product records.
//!
//! This crate provides [`Medicament`], an in-memory record describing a
//! pharmaceutical product: an identifier, a name, a stocked quantity, a
//! pharmaceutical form, and a reference to a product photo.
//!
//! The type is a plain value object:
//! - all fields are set at construction,
//! - every field except the identifier can be replaced in place,
//! - the current state renders to a human-readable line via [`std::fmt::Display`].
//!
//! No field is validated or interpreted. Quantities may be negative, names may
//! be empty, and the photo reference is an uninterpreted path or URL; callers
//! that need stronger guarantees enforce them at their own boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pharmaceutical product record.
///
/// Fields are private so that the identifier stays immutable: it is assigned
/// once by [`Medicament::new`] and no mutator exists for it. The other four
/// fields are replaced unconditionally through their setters.
///
/// # Examples
///
/// ```rust
/// use medicament::Medicament;
///
/// let mut med = Medicament::new(1, "Paracetamol", 10, "Tablet", "photo.png");
/// assert_eq!(med.qte(), 10);
///
/// med.set_qte(25);
/// assert_eq!(
///     med.to_string(),
///     "Médicament: Paracetamol, Quantité: 25, Forme: Tablet, Photo: photo.png",
/// );
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Medicament {
    id: u64,
    denomination: String,
    qte: i64,
    forme_pharmaceutique: String,
    photo: String,
}

impl Medicament {
    /// Creates a new record from all five field values.
    ///
    /// # Arguments
    ///
    /// * `id` - Opaque identifier, immutable after construction.
    /// * `denomination` - Product name, free text.
    /// * `qte` - Stocked quantity. No range constraint is enforced.
    /// * `forme_pharmaceutique` - Pharmaceutical form ("tablet", "syrup", ...).
    /// * `photo` - Path or URL to a product image, uninterpreted.
    ///
    /// Every input is accepted as-is; construction cannot fail.
    pub fn new(
        id: u64,
        denomination: impl Into<String>,
        qte: i64,
        forme_pharmaceutique: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            id,
            denomination: denomination.into(),
            qte,
            forme_pharmaceutique: forme_pharmaceutique.into(),
            photo: photo.into(),
        }
    }

    /// Returns the identifier assigned at construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the product name.
    pub fn denomination(&self) -> &str {
        &self.denomination
    }

    /// Returns the stocked quantity.
    pub fn qte(&self) -> i64 {
        self.qte
    }

    /// Returns the pharmaceutical form.
    pub fn forme_pharmaceutique(&self) -> &str {
        &self.forme_pharmaceutique
    }

    /// Returns the photo reference.
    pub fn photo(&self) -> &str {
        &self.photo
    }

    /// Replaces the product name.
    pub fn set_denomination(&mut self, denomination: impl Into<String>) {
        self.denomination = denomination.into();
    }

    /// Replaces the stocked quantity.
    pub fn set_qte(&mut self, qte: i64) {
        self.qte = qte;
    }

    /// Replaces the pharmaceutical form.
    pub fn set_forme_pharmaceutique(&mut self, forme_pharmaceutique: impl Into<String>) {
        self.forme_pharmaceutique = forme_pharmaceutique.into();
    }

    /// Replaces the photo reference.
    pub fn set_photo(&mut self, photo: impl Into<String>) {
        self.photo = photo.into();
    }
}

impl fmt::Display for Medicament {
    /// Renders the record as a single human-readable line.
    ///
    /// The identifier is deliberately omitted; the line carries the name,
    /// quantity, form, and photo reference of the current state.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Médicament: {}, Quantité: {}, Forme: {}, Photo: {}",
            self.denomination, self.qte, self.forme_pharmaceutique, self.photo
        )
    }
}

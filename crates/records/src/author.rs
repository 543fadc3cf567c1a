//! Author record: a flat, labeled record

use once_cell::sync::Lazy;
use recordkit_core::{ArgumentConstructible, Field, Record, TypeSignature, ValueKind};

static SIGNATURE: Lazy<TypeSignature> = Lazy::new(|| {
    TypeSignature::labeled([("name", ValueKind::Text), ("birthYear", ValueKind::Integer)])
});

/// A book author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    birth_year: i64,
}

impl Author {
    /// Author's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Year of birth
    pub fn birth_year(&self) -> i64 {
        self.birth_year
    }
}

impl ArgumentConstructible for Author {
    type Arguments = (String, i64);

    fn signature() -> &'static TypeSignature {
        &SIGNATURE
    }

    fn build((name, birth_year): Self::Arguments) -> Self {
        Author { name, birth_year }
    }
}

impl Record for Author {
    fn type_name(&self) -> &str {
        "Author"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::primitive("name", self.name.as_str()),
            Field::primitive("birthYear", self.birth_year),
        ]
    }
}

//! Book record: a composite embedding an [`Author`]
//!
//! The book signature inlines the author's two slots at positions 1..3.
//! Construction delegates that range to `Author::construct` first, so a
//! bad author value is reported against the author signature.

use crate::author::Author;
use once_cell::sync::Lazy;
use recordkit_core::normalize::capitalize_words;
use recordkit_core::{
    delegate, ArgumentConstructible, Field, Record, TypeMismatchError, TypeSignature, Value,
    ValueKind,
};
use std::ops::Range;

static SIGNATURE: Lazy<TypeSignature> = Lazy::new(|| {
    TypeSignature::labeled([
        ("title", ValueKind::Text),
        ("authorName", ValueKind::Text),
        ("authorBirthYear", ValueKind::Integer),
        ("pageCount", ValueKind::Integer),
        ("price", ValueKind::FloatingPoint),
    ])
});

/// Slots of the book signature that belong to the embedded author
const AUTHOR_SLOTS: Range<usize> = 1..3;

/// A book; the title is capitalized at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: Author,
    page_count: i64,
    price: f64,
}

impl Book {
    fn assemble(title: &str, author: Author, page_count: i64, price: f64) -> Self {
        Book {
            title: capitalize_words(title),
            author,
            page_count,
            price,
        }
    }

    /// Capitalized title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Embedded author
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Number of pages
    pub fn page_count(&self) -> i64 {
        self.page_count
    }

    /// Price
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ArgumentConstructible for Book {
    type Arguments = (String, String, i64, i64, f64);

    fn signature() -> &'static TypeSignature {
        &SIGNATURE
    }

    fn build((title, author_name, author_birth_year, page_count, price): Self::Arguments) -> Self {
        let author = Author::build((author_name, author_birth_year));
        Self::assemble(&title, author, page_count, price)
    }

    fn construct(arguments: Vec<Value>) -> Result<Self, TypeMismatchError> {
        let signature = Self::signature();
        signature.check_arity(&arguments)?;
        let author = delegate::<Author>(&arguments, AUTHOR_SLOTS)?;

        let (title, _, _, page_count, price) =
            signature.validate(arguments)?.unpack::<Self::Arguments>()?;
        Ok(Self::assemble(&title, author, page_count, price))
    }
}

impl Record for Book {
    fn type_name(&self) -> &str {
        "Book"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::primitive("title", self.title.as_str()),
            Field::record("author", &self.author),
            Field::primitive("pageCount", self.page_count),
            Field::primitive("price", self.price),
        ]
    }
}

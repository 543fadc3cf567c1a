//! Car record

use once_cell::sync::Lazy;
use recordkit_core::{ArgumentConstructible, Field, Record, TypeSignature, ValueKind};

static SIGNATURE: Lazy<TypeSignature> = Lazy::new(|| {
    TypeSignature::labeled([
        ("make", ValueKind::Text),
        ("model", ValueKind::Text),
        ("year", ValueKind::Integer),
        ("price", ValueKind::FloatingPoint),
    ])
});

/// A car listing
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    make: String,
    model: String,
    year: i64,
    price: f64,
}

impl Car {
    /// Manufacturer
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Model year
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Listing price
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ArgumentConstructible for Car {
    type Arguments = (String, String, i64, f64);

    fn signature() -> &'static TypeSignature {
        &SIGNATURE
    }

    fn build((make, model, year, price): Self::Arguments) -> Self {
        Car {
            make,
            model,
            year,
            price,
        }
    }
}

impl Record for Car {
    fn type_name(&self) -> &str {
        "Car"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::primitive("make", self.make.as_str()),
            Field::primitive("model", self.model.as_str()),
            Field::primitive("year", self.year),
            Field::primitive("price", self.price),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkit_core::{arguments, describe, DescribeOptions};

    #[test]
    fn test_construct_car() {
        let car = Car::construct(arguments!["Tesla", "Model 3", 2023, 49900.00]).unwrap();
        assert_eq!(car.make(), "Tesla");
        assert_eq!(car.model(), "Model 3");
        assert_eq!(car.year(), 2023);
        assert_eq!(car.price(), 49900.0);
    }

    #[test]
    fn test_short_and_mistyped_arguments() {
        let err = Car::construct(arguments!["Toyota", "Corolla", "2022"]).unwrap_err();
        assert_eq!(
            err.expected(),
            "(make: String, model: String, year: Int, price: Double)"
        );
        assert_eq!(err.actual(), "(String, String, String)");
    }

    #[test]
    fn test_integer_price_rejected() {
        let err = Car::construct(arguments!["Tesla", "Model 3", 2023, 49900]).unwrap_err();
        assert_eq!(err.actual(), "(String, String, Int, Int)");
    }

    #[test]
    fn test_describe_car() {
        let car = Car::construct(arguments!["Tesla", "Model 3", 2023, 49900.00]).unwrap();
        let expected = format!(
            "Instance of Car:\n  make: Tesla\n  model: Model 3\n  year: 2023\n  price: 49900.0\n{}\n",
            DescribeOptions::default().separator
        );
        assert_eq!(describe(&car), expected);
    }
}

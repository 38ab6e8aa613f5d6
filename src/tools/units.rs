//! Unit tables and conversion.
//!
//! Every category except Temperature is linear: each unit carries a factor to
//! the category's base unit and `result = value * factor[from] / factor[to]`.
//! Temperature is affine and goes through Celsius.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
}

/// A unit name and its factor to the category base unit.
/// Temperature factors are placeholders; that category never uses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub factor: f64,
}

const fn unit(name: &'static str, factor: f64) -> Unit {
    Unit { name, factor }
}

const LENGTH: &[Unit] = &[
    unit("millimeter", 0.001),
    unit("centimeter", 0.01),
    unit("meter", 1.0),
    unit("kilometer", 1000.0),
    unit("inch", 0.0254),
    unit("foot", 0.3048),
    unit("yard", 0.9144),
    unit("mile", 1609.344),
];

const WEIGHT: &[Unit] = &[
    unit("milligram", 0.001),
    unit("gram", 1.0),
    unit("kilogram", 1000.0),
    unit("ounce", 28.3495),
    unit("pound", 453.592),
    unit("stone", 6350.29),
    unit("ton", 1_000_000.0),
];

const TEMPERATURE: &[Unit] = &[
    unit("celsius", 1.0),
    unit("fahrenheit", 1.0),
    unit("kelvin", 1.0),
];

const VOLUME: &[Unit] = &[
    unit("milliliter", 0.001),
    unit("liter", 1.0),
    unit("gallon", 3.78541),
    unit("quart", 0.946353),
    unit("pint", 0.473176),
    unit("cup", 0.236588),
    unit("fluid_ounce", 0.0295735),
    unit("tablespoon", 0.0147868),
    unit("teaspoon", 0.00492892),
];

const AREA: &[Unit] = &[
    unit("square_millimeter", 0.000001),
    unit("square_centimeter", 0.0001),
    unit("square_meter", 1.0),
    unit("square_kilometer", 1_000_000.0),
    unit("square_inch", 0.00064516),
    unit("square_foot", 0.092903),
    unit("square_yard", 0.836127),
    unit("acre", 4046.86),
    unit("hectare", 10000.0),
];

const SPEED: &[Unit] = &[
    unit("meters_per_second", 1.0),
    unit("kilometers_per_hour", 0.277778),
    unit("miles_per_hour", 0.44704),
    unit("feet_per_second", 0.3048),
    unit("knots", 0.514444),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Speed => "Speed",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Length => LENGTH,
            Category::Weight => WEIGHT,
            Category::Temperature => TEMPERATURE,
            Category::Volume => VOLUME,
            Category::Area => AREA,
            Category::Speed => SPEED,
        }
    }

    pub fn unit_names(self) -> impl Iterator<Item = &'static str> {
        self.units().iter().map(|u| u.name)
    }

    pub fn find(self, name: &str) -> Option<Unit> {
        self.units().iter().copied().find(|u| u.name == name)
    }

    /// The first two units, used as from/to defaults whenever the category changes.
    pub fn default_pair(self) -> (&'static str, &'static str) {
        let units = self.units();
        (units[0].name, units[1].name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    UnknownCategory(String),
    UnknownUnit { category: Category, unit: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownCategory(name) => write!(f, "unknown category: {name}"),
            ConversionError::UnknownUnit { category, unit } => {
                write!(f, "unknown {category} unit: {unit}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Convert `value` between two units of the named category.
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> Result<f64, ConversionError> {
    let category = Category::from_name(category)
        .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
    convert_in(value, from, to, category)
}

/// Same as [`convert`] with an already-resolved category.
pub fn convert_in(value: f64, from: &str, to: &str, category: Category) -> Result<f64, ConversionError> {
    let lookup = |name: &str| {
        category.find(name).ok_or_else(|| ConversionError::UnknownUnit {
            category,
            unit: name.to_string(),
        })
    };
    let from_unit = lookup(from)?;
    let to_unit = lookup(to)?;

    if category == Category::Temperature {
        let celsius = to_celsius(value, from_unit.name);
        return Ok(from_celsius(celsius, to_unit.name));
    }

    Ok(value * from_unit.factor / to_unit.factor)
}

fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + 273.15,
        _ => celsius,
    }
}

/// Format a conversion result the way the converter screen shows it.
pub fn format_result(value: f64) -> String {
    format!("{value:.6}")
}

/// Human-readable unit name ("fluid_ounce" → "fluid ounce").
pub fn display_name(unit: &str) -> String {
    unit.replace('_', " ")
}

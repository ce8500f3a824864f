//! Demo shapes for `describe` and `convert`.

use hostbind::marshal::{Marshal, TypeDesc};

hostbind::marshal_struct! {
	/// Workbook open options.
	pub struct Options {
		pub password: Option<String>,
		pub raw_cell_value: Option<bool>,
	}
}

hostbind::marshal_struct! {
	/// Column and row numbers of one cell.
	#[derive(Debug, Clone, PartialEq, Default)]
	pub struct Coordinates {
		pub col: u32,
		pub row: u32,
	}
}

hostbind::marshal_struct! {
	/// Font attributes; every attribute is optional.
	pub struct Font {
		pub bold: Option<bool>,
		pub italic: Option<bool>,
		pub family: Option<String>,
		pub size: Option<f64>,
		pub color: Option<String>,
	}
}

hostbind::marshal_struct! {
	/// One worksheet row; empty cells are null.
	pub struct Row {
		pub cells: Vec<Option<String>>,
	}
}

/// Shape names paired with their descriptors.
pub const SHAPES: &[(&str, fn() -> TypeDesc)] = &[
	("options", <Options as Marshal>::describe),
	("coordinates", <Coordinates as Marshal>::describe),
	("font", <Font as Marshal>::describe),
	("row", <Row as Marshal>::describe),
];

/// Descriptor of the named shape.
pub fn shape(name: &str) -> Option<TypeDesc> {
	SHAPES.iter().find(|(shape, _)| *shape == name).map(|(_, describe)| describe())
}

/// Comma-separated shape names.
pub fn shape_names() -> String {
	SHAPES.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
}

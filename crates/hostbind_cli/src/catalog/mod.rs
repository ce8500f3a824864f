//! Demo operation catalogue: worksheet cell reference helpers.

use hostbind::dispatch::Registry;
use hostbind::marshal::{ArgRule, KindSet, Result};

pub mod cells;
pub mod shapes;


use shapes::Coordinates;

hostbind::marshal_struct! {
	/// Reply carrying a cell name.
	pub struct CellName {
		pub cell: String,
	}
}

hostbind::marshal_struct! {
	/// Reply carrying a column number.
	pub struct ColumnNumber {
		pub col: u32,
	}
}

hostbind::marshal_struct! {
	/// Reply carrying column letters.
	pub struct ColumnName {
		pub col: String,
	}
}

hostbind::marshal_struct! {
	/// Column letters and row number of a split cell name.
	pub struct SplitName {
		pub col: String,
		pub row: u32,
	}
}

const STRING: ArgRule = ArgRule::required(KindSet::STRING);
const NUMBER: ArgRule = ArgRule::required(KindSet::NUMBER);

/// Registry holding every demo operation.
pub fn registry() -> Result<Registry> {
	let mut registry = Registry::new();

	registry.register("CellNameToCoordinates", vec![STRING], |call| {
		let (col, row) = cells::cell_name_to_coordinates(&call.arg::<String>(0)?)?;
		Ok(Coordinates { col, row })
	})?;

	registry.register(
		"CoordinatesToCellName",
		vec![NUMBER, NUMBER, ArgRule::optional(KindSet::BOOLEAN)],
		|call| {
			let abs = call.opt_arg::<bool>(2)?.unwrap_or(false);
			let cell = cells::coordinates_to_cell_name(call.arg(0)?, call.arg(1)?, abs)?;
			Ok(CellName { cell })
		},
	)?;

	registry.register("ColumnNameToNumber", vec![STRING], |call| {
		let col = cells::column_name_to_number(&call.arg::<String>(0)?)?;
		Ok(ColumnNumber { col })
	})?;

	registry.register("ColumnNumberToName", vec![NUMBER], |call| {
		let col = cells::column_number_to_name(call.arg(0)?)?;
		Ok(ColumnName { col })
	})?;

	registry.register("JoinCellName", vec![STRING, NUMBER], |call| {
		let cell = cells::join_cell_name(&call.arg::<String>(0)?, call.arg(1)?)?;
		Ok(CellName { cell })
	})?;

	registry.register("SplitCellName", vec![STRING], |call| {
		let (col, row) = cells::split_cell_name(&call.arg::<String>(0)?)?;
		Ok(SplitName { col, row })
	})?;

	log::debug!("registered {} demo operations", registry.len());
	Ok(registry)
}

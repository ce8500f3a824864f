//! Worksheet cell reference arithmetic.

use hostbind::marshal::{MarshalError, Result};

/// Highest column number on a worksheet (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

/// Highest row number on a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

fn column_number_error() -> MarshalError {
	MarshalError::operation(format!(
		"the column number must be greater than or equal to 1 and less than or equal to {MAX_COLUMNS}"
	))
}

fn invalid_column_name(name: &str) -> MarshalError {
	MarshalError::operation(format!("invalid column name {name:?}"))
}

fn invalid_cell_name(cell: &str) -> MarshalError {
	MarshalError::operation(format!("invalid cell name {cell:?}"))
}

fn max_rows_error() -> MarshalError {
	MarshalError::operation("row number exceeds maximum limit")
}

/// Column letters (case-insensitive) to a 1-based column number.
pub fn column_name_to_number(name: &str) -> Result<u32> {
	if name.is_empty() {
		return Err(invalid_column_name(name));
	}

	let mut col = 0_u32;
	for byte in name.bytes() {
		let digit = match byte {
			b'A'..=b'Z' => byte - b'A' + 1,
			b'a'..=b'z' => byte - b'a' + 1,
			_ => return Err(invalid_column_name(name)),
		};
		col = col * 26 + u32::from(digit);
		if col > MAX_COLUMNS {
			return Err(column_number_error());
		}
	}
	Ok(col)
}

/// 1-based column number to column letters.
pub fn column_number_to_name(num: i64) -> Result<String> {
	if num < 1 || num > i64::from(MAX_COLUMNS) {
		return Err(column_number_error());
	}

	let mut rest = num;
	let mut letters = Vec::with_capacity(3);
	while rest > 0 {
		rest -= 1;
		letters.push(b'A' + (rest % 26) as u8);
		rest /= 26;
	}
	letters.reverse();
	Ok(letters.into_iter().map(char::from).collect())
}

/// Split a cell name such as `$B$12` into its column letters and row.
pub fn split_cell_name(cell: &str) -> Result<(String, u32)> {
	let is_col = |ch: char| ch.is_ascii_alphabetic() || ch == '$';
	if !cell.starts_with(is_col) {
		return Err(invalid_cell_name(cell));
	}

	let split = cell.rfind(is_col).map_or(0, |idx| idx + 1);
	let (col, row) = cell.split_at(split);
	if row.is_empty() {
		return Err(invalid_cell_name(cell));
	}

	match row.parse::<u32>() {
		Ok(row) if row > 0 => Ok((col.replace('$', ""), row)),
		_ => Err(invalid_cell_name(cell)),
	}
}

/// Join column letters and a row number, upper-casing the letters.
pub fn join_cell_name(col: &str, row: i64) -> Result<String> {
	if col.is_empty() || !col.bytes().all(|byte| byte.is_ascii_alphabetic()) {
		return Err(invalid_column_name(col));
	}
	if row < 1 {
		return Err(MarshalError::operation(format!("invalid row number {row}")));
	}
	Ok(format!("{}{row}", col.to_ascii_uppercase()))
}

/// Cell name to `(column, row)` numbers.
pub fn cell_name_to_coordinates(cell: &str) -> Result<(u32, u32)> {
	let (col, row) = split_cell_name(cell)
		.map_err(|err| MarshalError::operation(format!("cannot convert cell {cell:?} to coordinates: {err}")))?;
	let col = column_name_to_number(&col)?;
	if row > MAX_ROWS {
		return Err(max_rows_error());
	}
	Ok((col, row))
}

/// `(column, row)` numbers to a cell name, optionally with `$` anchors.
pub fn coordinates_to_cell_name(col: i64, row: i64, abs: bool) -> Result<String> {
	if col < 1 || row < 1 {
		return Err(MarshalError::operation(format!("invalid cell reference [{col}, {row}]")));
	}
	if row > i64::from(MAX_ROWS) {
		return Err(max_rows_error());
	}

	let name = column_number_to_name(col)?;
	let sign = if abs { "$" } else { "" };
	Ok(format!("{sign}{name}{sign}{row}"))
}

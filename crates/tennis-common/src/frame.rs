//! Building and reshaping string-typed DataFrames.
//!
//! Tables are unioned by column name: the result carries every column in
//! first-seen order and cells a frame does not provide are null.

use polars::prelude::*;

use crate::polars::any_to_string;

/// Builds a nullable string column.
pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Builds a column repeating one value (or null) `len` times.
pub fn constant_column(name: &str, value: Option<&str>, len: usize) -> Column {
    match value {
        Some(value) => string_column(name, vec![Some(value.to_string()); len]),
        None => Column::full_null(name.into(), len, &DataType::String),
    }
}

/// Zero-row frame with the given string columns.
pub fn empty_frame(columns: &[&str]) -> PolarsResult<DataFrame> {
    let columns = columns
        .iter()
        .map(|name| Series::new_empty((*name).into(), &DataType::String).into_column())
        .collect();
    DataFrame::new(columns)
}

/// Frame from named value vectors, in the given order.
pub fn frame_from_columns(columns: Vec<(&str, Vec<Option<String>>)>) -> PolarsResult<DataFrame> {
    DataFrame::new(
        columns
            .into_iter()
            .map(|(name, values)| string_column(name, values))
            .collect(),
    )
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Reads a column as nullable strings; `None` when the column is absent.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = match column.get(idx)? {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        };
        values.push(value);
    }
    Ok(Some(values))
}

/// Adds the column, or replaces it in place when one with the same name exists.
pub fn set_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> PolarsResult<()> {
    df.with_column(string_column(name, values))?;
    Ok(())
}

/// Replaces `name` with `columns`, inserted where `name` stood.
///
/// When `name` is absent the new columns are appended.
pub fn replace_with_columns(
    df: &mut DataFrame,
    name: &str,
    columns: Vec<Column>,
) -> PolarsResult<()> {
    let position = match df.get_column_index(name) {
        Some(position) => {
            df.drop_in_place(name)?;
            position
        }
        None => df.width(),
    };
    for (offset, column) in columns.into_iter().enumerate() {
        let column_name = column.name().clone();
        if has_column(df, column_name.as_str()) {
            df.drop_in_place(column_name.as_str())?;
        }
        let index = (position + offset).min(df.width());
        df.insert_column(index, column)?;
    }
    Ok(())
}

/// Keeps the listed columns that exist, in the listed order.
pub fn select_present(df: &DataFrame, columns: &[&str]) -> PolarsResult<DataFrame> {
    let present: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|name| has_column(df, name))
        .collect();
    df.select(present)
}

/// Concatenates frames by column name.
///
/// The result holds the union of all columns in first-seen order; a frame
/// missing a column contributes nulls. An empty input yields an empty frame.
pub fn union_frames(frames: Vec<DataFrame>) -> PolarsResult<DataFrame> {
    let mut names: Vec<String> = Vec::new();
    for frame in &frames {
        for name in frame.get_column_names() {
            if !names.iter().any(|existing| existing == name.as_str()) {
                names.push(name.to_string());
            }
        }
    }

    let mut result: Option<DataFrame> = None;
    for frame in frames {
        let aligned = align_to(&frame, &names)?;
        match result.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&aligned)?;
            }
            None => result = Some(aligned),
        }
    }
    match result {
        Some(df) => Ok(df),
        None => DataFrame::new(Vec::new()),
    }
}

fn align_to(df: &DataFrame, names: &[String]) -> PolarsResult<DataFrame> {
    let columns = names
        .iter()
        .map(|name| match df.column(name) {
            Ok(column) => column.cast(&DataType::String),
            Err(_) => Ok(Column::full_null(
                name.as_str().into(),
                df.height(),
                &DataType::String,
            )),
        })
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

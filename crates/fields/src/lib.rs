// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed form fields for the hydraform front-end data layer.
//!
//! Each supported input kind is one case of [`FieldKind`], held by a
//! [`FormField`] together with its name, label, error list, readonly flag and
//! formatter. Select fields over a closed literal set are provided separately
//! as [`TypedSingleSelect`] and [`TypedMultiSelect`]. All of them implement the
//! [`Field`] contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod config;
mod error;
mod field;
mod field_type;
mod formatter;
mod kind;
mod payload;
mod record;
mod typed_select;
mod value;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock, iso_timestamp};
pub use config::{
    DataFetchingSelectConfig, DateTimeStepConfig, DecimalConfig, SelectOption, SimpleSelectConfig,
};
pub use error::FieldError;
pub use field::{Field, FormField, is_select_field};
pub use field_type::FieldType;
pub use formatter::Formatter;
pub use kind::FieldKind;
pub use payload::FormPayload;
pub use record::{FieldRecord, fields_from_json, fields_from_json_with_clock};
pub use typed_select::{
    SelectLiteral, TypedMultiSelect, TypedSelectConfig, TypedSelectOption, TypedSingleSelect,
};
pub use value::{FieldValue, OneOrMany, SliderValue};

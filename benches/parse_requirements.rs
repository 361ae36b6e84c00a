//! Measures requirement parsing and dispatch on the paths a validator takes
//! for every evaluated value.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use reqval::{
    RequirementKind, RequirementType, Validator, ValidatorSpec, Value,
    requirement::{self, NoDocument},
};

fn parse_tuple(c: &mut Criterion) {
    let requirement_type = RequirementType::tuple([
        RequirementKind::Integer,
        RequirementKind::Number,
        RequirementKind::String,
    ])
    .unwrap();

    c.bench_function("parse tuple", |b| {
        b.iter(|| {
            requirement::parse_text(
                black_box("[ 12, 3.5e2 , hello ]"),
                &requirement_type,
                &NoDocument,
            )
            .unwrap()
        });
    });
}

fn parse_regexp_literal(c: &mut Criterion) {
    let requirement_type = RequirementType::Scalar(RequirementKind::Regexp);

    c.bench_function("parse regexp literal", |b| {
        b.iter(|| {
            requirement::parse_text(
                black_box(r"/^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$/i"),
                &requirement_type,
                &NoDocument,
            )
            .unwrap()
        });
    });
}

fn evaluate_numeric(c: &mut Criterion) {
    let range = Validator::new(
        ValidatorSpec::new("range")
            .requirement_type(
                RequirementType::tuple([RequirementKind::Number, RequirementKind::Number])
                    .unwrap(),
            )
            .validate_number(|value, args| {
                matches!(
                    (args[0].as_number(), args[1].as_number()),
                    (Some(min), Some(max)) if min <= value && value <= max
                )
            }),
    );
    let value = Value::from("42");

    c.bench_function("evaluate numeric range", |b| {
        b.iter(|| range.evaluate(black_box(&value), black_box("[1, 100]")).unwrap());
    });
}

criterion_group!(benches, parse_tuple, parse_regexp_literal, evaluate_numeric);
criterion_main!(benches);

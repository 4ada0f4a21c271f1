use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use contact_card::prelude::{ContactFields, validate};

fn bench_validate(c: &mut Criterion) {
    let valid = ContactFields {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        mobile_number: "5551234567".to_string(),
        email: "jane@example.com".to_string(),
    };
    let invalid = ContactFields {
        email: "not-an-email".to_string(),
        mobile_number: "123".to_string(),
        ..ContactFields::default()
    };

    c.bench_function("validate_valid_card", |b| {
        b.iter(|| validate(black_box(&valid)))
    });
    c.bench_function("validate_invalid_card", |b| {
        b.iter(|| validate(black_box(&invalid)))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);

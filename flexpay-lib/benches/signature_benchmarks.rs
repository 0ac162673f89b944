//! Performance benchmarks for signing and URL generation
//!
//! Run with: cargo bench -p flexpay-lib

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexpay_lib::params::ParamsMap;
use flexpay_lib::signing::{get_signature, validate_signature};
use flexpay_lib::{Amount, Brand, FlexPayClient, SaleCurrency};

const SECRET: &str = "zpXwe2D77g4P7ysGJcr3rY87TBYs6J";

fn postback() -> ParamsMap {
    [
        ("saleID", "433456"),
        ("priceAmount", "0.00"),
        ("referenceID", "reference1234"),
        ("priceCurrency", "USD"),
        ("custom1", "My"),
        ("subscriptionType", "recurring"),
        ("period", "P1M"),
        ("trialAmount", "0.01"),
        ("trialPeriod", "P3D"),
        ("email", "foo@example.com"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn bench_get_signature(c: &mut Criterion) {
    let params = postback();
    c.bench_function("get_signature", |b| {
        b.iter(|| get_signature(black_box(&params), SECRET, "60678"))
    });
}

fn bench_validate_signature(c: &mut Criterion) {
    let mut params = postback();
    params.insert("signature".into(), get_signature(&params, SECRET, "60678"));
    c.bench_function("validate_signature", |b| {
        b.iter(|| validate_signature(black_box(&params), SECRET, "60678"))
    });
}

fn bench_purchase_url(c: &mut Criterion) {
    let client = FlexPayClient::new("60678", SECRET, Brand::Verotel).unwrap();
    c.bench_function("purchase_url", |b| {
        b.iter(|| {
            client
                .purchase_builder()
                .with_price_amount(Amount::from(10i64))
                .with_price_currency(SaleCurrency::Eur)
                .with_description(black_box("My Dščřčřřěřě&?=blah123"))
                .with_reference_id("ref1")
                .build()
        })
    });
}

criterion_group!(
    benches,
    bench_get_signature,
    bench_validate_signature,
    bench_purchase_url
);
criterion_main!(benches);

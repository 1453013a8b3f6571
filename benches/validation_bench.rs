use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hubdev::core::*;

fn bench_validators(c: &mut Criterion) {
    c.bench_function("validate_cnpj_masked", |b| {
        b.iter(|| validate_cnpj(black_box("00.000.000/0001-91")))
    });

    c.bench_function("validate_cnpj_repeated", |b| {
        b.iter(|| validate_cnpj(black_box("11111111111111")))
    });

    c.bench_function("validate_cpf", |b| {
        b.iter(|| validate_cpf(black_box("123.456.789-09")))
    });

    c.bench_function("validate_cep", |b| {
        b.iter(|| validate_cep(black_box("01001-000")))
    });

    c.bench_function("validate_date", |b| {
        b.iter(|| validate_date(black_box("29/02/2024")))
    });
}

#[cfg(feature = "client")]
fn bench_decode(c: &mut Criterion) {
    use hubdev::client::{ResponseFormat, decode};

    let json = r#"{"status":true,"return":"OK","result":{"numero_de_inscricao":"00.000.000/0001-91","nome":"BANCO DO BRASIL SA","uf":"DF","situacao":"ATIVA"}}"#;
    let xml = "<root><status>true</status><return>OK</return><result><numero_de_inscricao>00.000.000/0001-91</numero_de_inscricao><nome>BANCO DO BRASIL SA</nome><uf>DF</uf><situacao>ATIVA</situacao></result></root>";

    c.bench_function("decode_json", |b| {
        b.iter(|| decode(ResponseFormat::Json, black_box(json)))
    });

    c.bench_function("decode_xml", |b| {
        b.iter(|| decode(ResponseFormat::Xml, black_box(xml)))
    });
}

#[cfg(not(feature = "client"))]
fn bench_decode(_c: &mut Criterion) {}

criterion_group!(benches, bench_validators, bench_decode);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use monkey_parser::lexer::lexer::Lexer;
use monkey_parser::parser::parser::Parser;

fn program(source: &str) {
    let mut parser = Parser::new(Lexer::new(source));
    let _ast = parser.parse_program();
    assert!(parser.errors().is_empty());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| program(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "1".to_string();
    for _i in 0..200 {
        source.push_str(" == 2 < 3 + 5 * 5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| program(&source)));
}

fn many_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("many-statements");

    let mut source = String::new();
    for i in 0..500 {
        source.push_str(&format!("let x{} = fn(a, b) {{ a + b; }};\n", i));
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many-statements", |b| b.iter(|| program(&source)));
}

criterion_group!(benches, long_expr, stress_precedence, many_statements);
criterion_main!(benches);

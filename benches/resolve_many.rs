//! Repeated resolution benches over a fake project/node_modules fixture.

#[macro_use]
extern crate criterion;

use criterion::{BatchSize, Criterion};
use sol_resolver::{project_util::FakeProject, ImportExtractor, RegexImportExtractor, Resolver};

fn build_fixture() -> FakeProject {
    let project = FakeProject::new("bench-proj").expect("create fake project");
    project.install_package("dep", "1.2.3", &[("Lib.sol", "contract Lib {}")]).expect("install dep");

    for i in 0..50 {
        let content = format!(
            r#"
            import "./Base.sol";
            import "dep/Lib.sol";
            contract Token{i} {{}}
            "#
        );
        project.add_source(&format!("contracts/Token{i}.sol"), &content).expect("write source");
    }
    project.add_source("contracts/Base.sol", "contract Base {}").expect("write base");

    project
}

fn resolve_many_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let fixture = build_fixture();
    let entries: Vec<_> =
        (0..50).map(|i| fixture.root().join(format!("contracts/Token{i}.sol"))).collect();

    let mut group = c.benchmark_group("resolve many");
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.to_async(&rt).iter_batched(
            || entries.clone(),
            |entries| async {
                let mut resolver = Resolver::create(fixture.root(), &[], None).await.expect("create resolver");
                for entry in &entries {
                    let file = resolver.resolve_project_file(entry).await.expect("resolve entry");
                    for import_string in RegexImportExtractor.extract(file.content()) {
                        let _ = resolver.resolve_import(&file, &import_string).await.expect("resolve import");
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, resolve_many_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patchspell::checker::dictionary::Dictionary;
use patchspell::checker::{similarity, suggestions};
use patchspell::parser::{self, ScanMode};
use patchspell::SpellChecker;

const WORDS: &str = "\
allocate buffer before use release memory pointer reference counter \
initialize structure function parameter return value error handling \
interrupt handler register device driver kernel module configuration \
transaction commit rollback checkpoint segment relation attribute index";

const PATCH: &str = "\
+/*
+ * Allocate the bufer before use and relase the memroy
+ * once the refrence countr drops to zero.
+ */
+static int handler(struct device *dev) /* interupt hanlder */
";

fn checker() -> SpellChecker {
    SpellChecker::with_dictionary(Dictionary::from_sources([WORDS]).unwrap())
}

fn bench_classify(c: &mut Criterion) {
    let checker = checker();

    c.bench_function("classify_known", |b| {
        b.iter(|| checker.classify(black_box("configuration")))
    });
    c.bench_function("classify_one_edit", |b| {
        b.iter(|| checker.classify(black_box("configuraton")))
    });
    c.bench_function("classify_similarity", |b| {
        b.iter(|| checker.classify(black_box("confgiruation")))
    });
}

fn bench_components(c: &mut Criterion) {
    c.bench_function("generate_edits", |b| {
        b.iter(|| suggestions::generate(black_box("transaction")))
    });
    c.bench_function("similarity_score", |b| {
        b.iter(|| similarity::score(black_box("checkpoint"), black_box("chekpoint")))
    });
}

fn bench_patch(c: &mut Criterion) {
    let checker = checker();

    c.bench_function("check_patch", |b| {
        b.iter(|| {
            let spans = parser::scan(black_box(PATCH), ScanMode::Patch, None);
            checker.check_spans(&spans)
        })
    });
}

criterion_group!(benches, bench_classify, bench_components, bench_patch);
criterion_main!(benches);

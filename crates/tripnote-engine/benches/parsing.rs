use criterion::{Criterion, criterion_group, criterion_main};
use tripnote_engine::{RuleSet, parse_memo, scan_inline};

fn generate_memo(sections: usize) -> String {
    let base = "✅ 출발 전 체크리스트\n- [x] 여권 챙기기\n- [ ] 환전하기\n\n---\n\n주소: 제주시 애월읍 애월로 27\n영업시간: 09:00 - 21:00\n\n---\n\n| 항목 | 금액 |\n|---|---|\n| 입장료 | 1,000원 |\n\n---\n\n오늘은 **바람**이 많이 불었지만 *날씨*는 좋았다.\n\n---\n\n";
    base.repeat(sections)
}

fn bench_parse_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let rules = RuleSet::builtin();
    let memo = generate_memo(100);
    group.bench_function("parse_memo", |b| {
        b.iter(|| {
            let blocks = parse_memo(std::hint::black_box(&memo), &rules);
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_scan_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let text = "입장은 **무료**지만 *사전 예약*이 필요하고 **현장 발권**은 불가".repeat(50);
    group.bench_function("scan_inline", |b| {
        b.iter(|| {
            let spans = scan_inline(std::hint::black_box(&text));
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_memo, bench_scan_inline);
criterion_main!(benches);

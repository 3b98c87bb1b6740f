use std::hint::black_box;

use bencher::HeaderBlock;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use micro_security_headers::parser::{HeaderParser, MalformedPolicy};

static SMALL_BLOCK: HeaderBlock = HeaderBlock::small("small.txt", include_str!("../resources/small.txt"));
static LARGE_BLOCK: HeaderBlock = HeaderBlock::large("large.txt", include_str!("../resources/large.txt"));

fn blocks() -> Vec<HeaderBlock> {
    vec![SMALL_BLOCK, LARGE_BLOCK]
}

fn benchmark_parse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse");

    for (label, policy) in [("strict", MalformedPolicy::Reject), ("lenient", MalformedPolicy::Skip)] {
        let parser = HeaderParser::builder().malformed_policy(policy).build();

        for block in blocks() {
            group.throughput(Throughput::Bytes(block.content().len() as u64));
            let id = BenchmarkId::new(format!("{label}/{}", block.size().as_str()), format!("{} ({} lines)", block.name(), block.line_count()));
            group.bench_with_input(id, &block, |b, block| {
                b.iter(|| {
                    let output = parser.parse(black_box(block.content())).expect("benchmark blocks are well formed");
                    black_box(output);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(parser, benchmark_parse);
criterion_main!(parser);

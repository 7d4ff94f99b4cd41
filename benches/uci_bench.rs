use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use uci::Package;

const NETWORK: &str = "
config interface 'loopback'
\toption ifname 'lo'
\toption proto 'static'
\toption ipaddr '127.0.0.1'
\toption netmask '255.0.0.0'

config globals 'globals'
\toption ula_prefix 'fd9d:111a:353b::/48'

config interface 'lan'
\toption type 'bridge'
\toption ifname 'eth0'
\toption proto 'static'
\toption ipaddr '192.168.1.1'
\toption netmask '255.255.255.0'
\toption ip6assign '60'
\tlist dns '8.8.8.8'
\tlist dns '1.1.1.1'

config interface 'wan'
\toption ifname 'eth1'
\toption proto 'dhcp'

config interface 'wan6'
\toption ifname 'eth1'
\toption proto 'dhcpv6'
";

pub fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(NETWORK.len() as u64));
    group.bench_function("network", |b| {
        b.iter(|| Package::from_slice(black_box(NETWORK.as_bytes())).unwrap())
    });
    group.finish();
}

pub fn serialize_benchmark(c: &mut Criterion) {
    let package = Package::from_slice(NETWORK.as_bytes()).unwrap();
    let mut group = c.benchmark_group("serialize");
    group.bench_function("network", |b| b.iter(|| black_box(&package).to_string()));
    group.finish();
}

criterion_group!(benches, parse_benchmark, serialize_benchmark);
criterion_main!(benches);

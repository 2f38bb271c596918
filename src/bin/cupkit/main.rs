//! `CupKit` CLI 占位入口：本 crate 是纯库，这里只打印使用指引。

fn main() {
    println!(
        "cupkit is a library crate; it has no command line interface.\n\
         Add `cupkit` to your Cargo.toml and call `cupkit::Codec::{{encode, decode}}` from your code."
    );
}

use fuzz_heapkit::union_find::Input;

fn main() {
    afl::fuzz!(|data: Input| data.run());
}

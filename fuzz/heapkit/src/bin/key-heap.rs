use fuzz_heapkit::key_heap::Input;

fn main() {
    afl::fuzz!(|data: Input| data.run());
}

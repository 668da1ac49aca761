use fuzz_heapkit::heap::Input;

fn main() {
    afl::fuzz!(|data: Input| data.run());
}

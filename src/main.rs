fn main() {
    vault::term::main()
}

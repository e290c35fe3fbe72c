fn main() {
    slint_build::compile("ui/translator.slint").expect("failed to compile slint UI");
}

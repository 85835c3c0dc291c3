fn main() {
    slint_build::compile("ui/editor.slint").expect("Slint build failed");
}

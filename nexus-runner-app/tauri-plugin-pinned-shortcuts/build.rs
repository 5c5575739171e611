const COMMANDS: &[&str] = &["pin", "is_supported"];

fn main() {
    // The Android side is reached over JNI from Rust, so there is no
    // Kotlin project to hand to `.android_path()`.
    tauri_plugin::Builder::new(COMMANDS).build();
}

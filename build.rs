fn main() {
    emit_espidf_env();
}

/// Emits ESP-IDF sysenv link/include arguments for target builds.
#[cfg(feature = "espidf")]
fn emit_espidf_env() {
    embuild::espidf::sysenv::output();
}

#[cfg(not(feature = "espidf"))]
fn emit_espidf_env() {}

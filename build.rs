fn main() {
    // ESP-IDF link arguments are only needed for the firmware build;
    // host builds (tests, fuzzing) run without the espidf feature.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

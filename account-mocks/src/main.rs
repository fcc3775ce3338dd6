fn main() {
    dioxus::launch(account_mocks::App);
}

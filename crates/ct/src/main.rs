fn main() -> anyhow::Result<()> {
    ct::init();

    ct::cli::run()
}

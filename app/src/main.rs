fn main() -> anyhow::Result<()> {
    locker_app::run()
}

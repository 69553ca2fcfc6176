fn main() {
    // Windows resource compilation for icon and manifest
    #[cfg(windows)]
    {
        let res = winres::WindowsResource::new();
        res.compile().unwrap();
    }
}

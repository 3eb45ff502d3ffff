// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use charfind::config::settings::Settings;

    /// 无配置文件与环境变量时落到默认值
    #[test]
    fn defaults_apply_without_overrides() {
        let settings = Settings::new().expect("default settings should load");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(
            settings.dataset.source_url,
            "http://www.unicode.org/Public/UNIDATA/UnicodeData.txt"
        );
        assert_eq!(settings.dataset.cache_path, "UnicodeData.txt");
        assert_eq!(settings.dataset.download_timeout_secs, 30);
        assert_eq!(settings.metrics.listen_addr, "0.0.0.0:9000");
    }
}

//! nginx configuration generation for the single-page frontend.
//!
//! Templates are plain nginx configs written against the placeholder
//! domain `example.com` and the placeholder upstream
//! `http://api-backend:8080`. Rendering swaps both for real values and,
//! when TLS is off, comments out every TLS-only directive.

use std::path::{Path, PathBuf};

/// Domain used in templates
pub const TEMPLATE_DOMAIN: &str = "example.com";
/// API upstream used in templates
pub const TEMPLATE_API_URL: &str = "http://api-backend:8080";

/// Directives that only make sense with TLS, matched at line start
const TLS_ONLY_DIRECTIVES: &[&str] = &[
    "listen 443 ssl",
    "ssl_certificate ",
    "ssl_certificate_key ",
    "return 301 https://$host$request_uri;",
    "add_header Strict-Transport-Security ",
];

#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub domain: String,
    pub api_url: String,
    pub ssl_enabled: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            domain: TEMPLATE_DOMAIN.to_string(),
            api_url: "http://api:8080".to_string(),
            ssl_enabled: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Path of the template for an environment, e.g. `<dir>/nginx-prod.conf`
pub fn template_path(dir: &Path, env: &str) -> PathBuf {
    dir.join(format!("nginx-{env}.conf"))
}

/// Read the template for `env` from `dir`
pub fn load_template(dir: &Path, env: &str) -> Result<String, TemplateError> {
    let path = template_path(dir, env);
    if !path.is_file() {
        return Err(TemplateError::NotFound(path));
    }
    std::fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })
}

/// Substitute the placeholders and apply the TLS toggle
pub fn render_template(template: &str, options: &TemplateOptions) -> String {
    let substituted = template
        .replace(TEMPLATE_DOMAIN, &options.domain)
        .replace(TEMPLATE_API_URL, &options.api_url);

    if options.ssl_enabled {
        return substituted;
    }

    let mut out = String::with_capacity(substituted.len() + 64);
    for line in substituted.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_tls_only = TLS_ONLY_DIRECTIVES
            .iter()
            .any(|directive| trimmed.starts_with(directive));

        if is_tls_only {
            let indent = &line[..line.len() - trimmed.len()];
            out.push_str(indent);
            out.push_str("# ");
            out.push_str(trimmed);
        } else {
            out.push_str(line);
        }
    }
    out
}

/// A `location` block inside a generated server block
#[derive(Debug, Clone)]
pub struct Location {
    pub path: String,
    /// Directives, one per line, without indentation
    pub config: String,
}

#[derive(Debug, Clone)]
pub struct ServerBlock {
    pub server_name: String,
    pub root: String,
    pub locations: Vec<Location>,
}

/// Emit a plain-HTTP `server { ... }` block
pub fn generate_server_block(block: &ServerBlock) -> String {
    let mut out = format!(
        "server {{\n    listen 80;\n    server_name {};\n    root {};\n    index index.html;\n\n",
        block.server_name, block.root
    );

    for location in &block.locations {
        out.push_str(&format!("    location {} {{\n", location.path));
        for line in location.config.lines() {
            if !line.is_empty() {
                out.push_str("        ");
                out.push_str(line);
            }
            out.push('\n');
        }
        out.push_str("    }\n\n");
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "server {
    listen 80;
    server_name example.com www.example.com;
    return 301 https://$host$request_uri;
}

server {
    listen 443 ssl http2;
    server_name example.com;
    ssl_certificate /etc/ssl/example.com.crt;
    ssl_certificate_key /etc/ssl/example.com.key;
    add_header Strict-Transport-Security \"max-age=31536000\" always;

    location /api/ {
        proxy_pass http://api-backend:8080;
    }
}
";

    #[test]
    fn test_render_substitutes_domain_and_api() {
        let options = TemplateOptions {
            domain: "shop.test".to_string(),
            api_url: "http://orders:9000".to_string(),
            ssl_enabled: true,
        };

        let rendered = render_template(TEMPLATE, &options);

        assert!(!rendered.contains("example.com"));
        assert!(rendered.contains("server_name shop.test www.shop.test;"));
        assert!(rendered.contains("ssl_certificate /etc/ssl/shop.test.crt;"));
        assert!(rendered.contains("proxy_pass http://orders:9000;"));
        assert!(rendered.contains("    listen 443 ssl http2;"));
    }

    #[test]
    fn test_render_without_ssl_comments_out_tls_directives() {
        let options = TemplateOptions {
            ssl_enabled: false,
            ..TemplateOptions::default()
        };

        let rendered = render_template(TEMPLATE, &options);

        assert!(rendered.contains("    # listen 443 ssl http2;\n"));
        assert!(rendered.contains("    # ssl_certificate /etc/ssl/example.com.crt;\n"));
        assert!(rendered.contains("    # ssl_certificate_key /etc/ssl/example.com.key;\n"));
        assert!(rendered.contains("    # return 301 https://$host$request_uri;\n"));
        assert!(rendered.contains("    # add_header Strict-Transport-Security"));
        // Plain HTTP stays active
        assert!(rendered.contains("    listen 80;\n"));
        assert!(rendered.contains("        proxy_pass http://api:8080;\n"));
    }

    #[test]
    fn test_generate_server_block() {
        let block = ServerBlock {
            server_name: "dashboard.local".to_string(),
            root: "/usr/share/nginx/html".to_string(),
            locations: vec![Location {
                path: "/".to_string(),
                config: "try_files $uri $uri/ /index.html;\nexpires -1;".to_string(),
            }],
        };

        let expected = "server {
    listen 80;
    server_name dashboard.local;
    root /usr/share/nginx/html;
    index index.html;

    location / {
        try_files $uri $uri/ /index.html;
        expires -1;
    }

}
";
        assert_eq!(generate_server_block(&block), expected);
    }

    #[test]
    fn test_generate_server_block_keeps_blank_lines_unindented() {
        let block = ServerBlock {
            server_name: "api.local".to_string(),
            root: "/srv".to_string(),
            locations: vec![Location {
                path: "/api/".to_string(),
                config: "proxy_pass http://api:8080;\n\nproxy_set_header Host $host;".to_string(),
            }],
        };

        let rendered = generate_server_block(&block);
        assert!(rendered.contains(
            "        proxy_pass http://api:8080;\n\n        proxy_set_header Host $host;\n"
        ));
        assert!(!rendered.contains("        \n"));

        let empty = ServerBlock {
            locations: Vec::new(),
            ..block
        };
        assert_eq!(
            generate_server_block(&empty),
            "server {\n    listen 80;\n    server_name api.local;\n    root /srv;\n    index index.html;\n\n}\n"
        );
    }

    #[test]
    fn test_load_template_missing() {
        let dir = std::env::temp_dir();
        let err = load_template(&dir, "no-such-env-for-tests").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
        assert!(err.to_string().contains("nginx-no-such-env-for-tests.conf"));
    }

    #[test]
    fn test_bundled_templates_render() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        for env in ["dev", "prod"] {
            let template = load_template(&dir, env).unwrap();
            let rendered = render_template(&template, &TemplateOptions::default());
            assert!(rendered.contains("server {"));
            assert!(!rendered.contains(TEMPLATE_API_URL));
        }
    }
}

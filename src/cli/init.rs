//! Init command implementation.
//!
//! Scaffolds a pagefill site: `site.yaml`, sample content documents and a
//! minimal host page wired with the selectors the binders target.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{FillError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};

/// Scaffold a pagefill site (site.yaml, content samples, host page)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing site.yaml
    #[arg(long)]
    pub force: bool,
}

const MANIFEST: &str = "\
content: content
page: index.html
output: dist
solutions:
  - solution-1.md
  - solution-2.md
";

const HERO: &str = "\
---
title: Your company name
subtitle: What you do, in one line
welcome_text: A short welcome with **bold** claims.
button_text: Get in touch
---
";

const ABOUT: &str = "\
---
title: About us
subtitle: Who we are
---
Two decades of experience, *one* promise.

- reliable
- worldwide
";

const STATS: &str = "\
---
stat1_number: 25+
stat1_label: Years
stat2_number: 40
stat2_label: Countries
stat3_number: 1200
stat3_label: Shipments
stat4_number: 98%
stat4_label: On time
---
";

const SOLUTION_1: &str = "\
---
title: First solution
icon: fas fa-ship
order: 1
features: [fast, tracked]
---
Describe the first solution here.
";

const SOLUTION_2: &str = "\
---
title: Second solution
icon: fas fa-plane
order: 2
---
Describe the second solution here.
";

const CONTACT: &str = "\
---
title: Contact
email: hello@example.com
phone: +00 0 00 00 00 00
address: 1 Example Street\\nExample City
---
We answer within one business day.
";

const FOOTER: &str = "\
---
company: Your company name
tagline: One line about you
copyright: © 2024 Your company
links: [Home, About, Contact]
---
";

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"/><title>pagefill site</title></head>
<body>
<section class="hero">
  <h1>Static title</h1>
  <p class="tagline">Static tagline</p>
  <div class="hero-text"><p>Static welcome.</p></div>
  <a class="btn-corporate" href="#contact">Contact</a>
</section>
<section id="about">
  <h2 class="section-title">About</h2>
  <p class="section-subtitle">Subtitle</p>
  <div class="about-text"><p>Static about text.</p></div>
</section>
<div class="stats">
  <div class="stat-item"><span class="stat-number">0</span><span class="stat-label">-</span></div>
  <div class="stat-item"><span class="stat-number">0</span><span class="stat-label">-</span></div>
  <div class="stat-item"><span class="stat-number">0</span><span class="stat-label">-</span></div>
  <div class="stat-item"><span class="stat-number">0</span><span class="stat-label">-</span></div>
</div>
<section id="solutions">
  <div class="solutions-container">
    <h2 class="section-title">Solutions</h2>
    <div class="solution-row"><p>Static solution card.</p></div>
  </div>
</section>
<section id="contact">
  <h2 class="section-title">Contact</h2>
  <span class="contact-email">hello@example.com</span>
  <span class="contact-phone">+00</span>
  <p class="contact-address">Static address</p>
  <div class="contact-text"><p>Static contact text.</p></div>
</section>
<footer>
  <span class="footer-brand">Company</span>
  <p class="footer-tagline">Tagline</p>
  <ul class="footer-links"><li><a href="#about">About</a></li></ul>
  <p class="copyright">©</p>
</footer>
</body>
</html>
"##;

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(FillError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    write_file(&manifest_path, MANIFEST, true, printer)?;

    let content_dir = args.path.join("content");
    if !content_dir.exists() {
        fs::create_dir_all(&content_dir).map_err(|e| FillError::Io {
            path: content_dir.clone(),
            message: format!("Failed to create content directory: {}", e),
        })?;
    }

    let samples: &[(&str, &str)] = &[
        ("hero.md", HERO),
        ("about.md", ABOUT),
        ("stats.md", STATS),
        ("solution-1.md", SOLUTION_1),
        ("solution-2.md", SOLUTION_2),
        ("contact.md", CONTACT),
        ("footer.md", FOOTER),
    ];
    for (name, body) in samples {
        write_file(&content_dir.join(name), body, false, printer)?;
    }

    write_file(&args.path.join("index.html"), PAGE, false, printer)?;

    printer.success("Created", &format!("pagefill site in {}", display_path(&args.path)));
    printer.info("Next", "run `pagefill hydrate` to build dist/index.html");

    Ok(())
}

/// Write a scaffold file. Existing files are only overwritten when
/// `overwrite` is set (the manifest, behind --force); samples are kept.
fn write_file(path: &Path, body: &str, overwrite: bool, printer: &Printer) -> Result<()> {
    if path.exists() && !overwrite {
        printer.warning("Keeping", &format!("{} (already exists)", display_path(path)));
        return Ok(());
    }
    fs::write(path, body).map_err(|e| FillError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write: {}", e),
    })?;
    printer.status("Creating", &display_path(path));
    Ok(())
}

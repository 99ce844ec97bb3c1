//! Static export: every page the server would render, written as plain files
//! for hosts that cannot run the binary.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};

use crate::{
    app::render::{
        prerender_home_page, prerender_not_found_page, prerender_project_page,
        strip_runtime_tokens, RenderContext,
    },
    catalog::Catalog,
    resolve::{project_path, NotFoundCopy},
    sitemap::render_sitemap,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Written HTML pages, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Number of files copied from the public directory.
    pub public_files: usize,
}

pub fn export_site(
    catalog: &Arc<Catalog>,
    ctx: &RenderContext,
    out_dir: &Path,
    public_dir: Option<&Path>,
) -> Result<ExportReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let mut report = ExportReport::default();

    write_page(out_dir, "index.html", &prerender_home_page(ctx, catalog), &mut report)?;
    for project in catalog.all() {
        let rel = format!("{}/index.html", project_path(&project.id));
        write_page(out_dir, &rel, &prerender_project_page(ctx, project), &mut report)?;
    }
    let not_found = prerender_not_found_page(ctx, &NotFoundCopy::default());
    write_page(out_dir, "404.html", &not_found, &mut report)?;

    let sitemap = render_sitemap(catalog, &ctx.assets, &ctx.site_url);
    write_file(&out_dir.join("sitemap.xml"), &sitemap)?;

    if let Some(public) = public_dir {
        if public.is_dir() {
            report.public_files = copy_dir(public, out_dir)
                .with_context(|| format!("copying {}", public.display()))?;
        } else {
            tracing::warn!(dir = %public.display(), "public directory missing, media not copied");
        }
    }

    tracing::info!(
        pages = report.pages.len(),
        public_files = report.public_files,
        out = %out_dir.display(),
        "export finished"
    );
    Ok(report)
}

fn write_page(out_dir: &Path, rel: &str, html: &str, report: &mut ExportReport) -> Result<()> {
    write_file(&out_dir.join(rel), &strip_runtime_tokens(html))?;
    tracing::debug!(page = rel, "wrote page");
    report.pages.push(PathBuf::from(rel));
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<usize> {
    fs::create_dir_all(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_dir_recurses() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("videos")).unwrap();
        fs::write(src.path().join("videos/a.mp4"), b"v").unwrap();
        fs::write(src.path().join("favicon.ico"), b"i").unwrap();

        assert_eq!(copy_dir(src.path(), dst.path()).unwrap(), 2);
        assert!(dst.path().join("videos/a.mp4").is_file());
        assert!(dst.path().join("favicon.ico").is_file());
    }
}

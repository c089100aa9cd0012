//! Ordered conversion of one document.
//!
//! Pass order is load-bearing:
//! - transclusion runs first, while `{!...!}` is still unescaped;
//! - brace escaping runs second; tags emitted by later passes contain no
//!   braces;
//! - the emoticon table is matched in its escaped form;
//! - import injection and frontmatter run last because they depend on
//!   final line positions.

use std::borrow::Cow;
use std::path::Path;

use crate::error::ConvertError;
use crate::frontmatter::apply_frontmatter;
use crate::imports::{ImportRegistry, insert_imports};
use crate::options::ConvertOptions;
use crate::resolve::ContentResolver;
use crate::rewrite::{
    EmoticonPass, EscapeBraces, IconPass, ImagePathPass, LinkRetargetPass, RewritePass,
    TransclusionPass,
};

/// How a document is rendered on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    /// Rendered as its own page; gets a title frontmatter.
    Standalone,
    /// Only rendered when included into another document.
    Fragment,
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMode::Standalone => f.write_str("standalone"),
            ConversionMode::Fragment => f.write_str("fragment"),
        }
    }
}

type BoxedPass = Box<dyn RewritePass + Send + Sync>;

/// Ordered rewrite passes plus the import and frontmatter finishing steps.
///
/// A pipeline holds no per-document state: each [`Pipeline::run`] owns its
/// own [`ImportRegistry`], so one pipeline can be shared across threads.
pub struct Pipeline {
    passes: Vec<(&'static str, BoxedPass)>,
    import_line: usize,
    frontmatter: bool,
}

impl Pipeline {
    /// Creates an empty pipeline.
    ///
    /// Imports are injected at 1-indexed `import_line`; `frontmatter`
    /// controls whether the first line is turned into a title block.
    pub fn new(import_line: usize, frontmatter: bool) -> Self {
        Self {
            passes: Vec::new(),
            import_line,
            frontmatter,
        }
    }

    /// Builds the standard pipeline for `mode`.
    ///
    /// Standalone: transclusion, escape, links, emoticon table, images,
    /// icons, imports at line 2, frontmatter.
    /// Fragment: transclusion, escape, links, images, icons, imports at
    /// line 1.
    pub fn for_mode(mode: ConversionMode, options: &ConvertOptions) -> Self {
        let mode_options = options.mode(mode);
        let mut pipeline = Self::new(
            mode_options.import_line,
            mode == ConversionMode::Standalone,
        );

        pipeline.add_pass(
            "transclusion",
            TransclusionPass::new(mode_options.import_base.as_str()),
        );
        pipeline.add_pass("escape-braces", EscapeBraces);
        pipeline.add_pass(
            "relative-links",
            LinkRetargetPass::new(options.links.from.as_str(), options.links.to.as_str()),
        );
        if mode == ConversionMode::Standalone {
            pipeline.add_pass("emoticon-table", EmoticonPass::new(options.emoticon.clone()));
        }
        pipeline.add_pass(
            "image-paths",
            ImagePathPass::new(&options.legacy_image_dir, &mode_options.image_prefix),
        );
        for font in &options.icon_fonts {
            pipeline.add_pass("icons", IconPass::new(font.clone()));
        }

        pipeline
    }

    /// Appends a pass; passes run in insertion order.
    pub fn add_pass<P>(&mut self, name: &'static str, pass: P)
    where
        P: RewritePass + Send + Sync + 'static,
    {
        self.passes.push((name, Box::new(pass)));
    }

    /// Names of the configured passes, in order.
    pub fn pass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|(name, _)| *name)
    }

    /// Converts one document.
    pub fn run(&self, input: &str) -> String {
        let mut imports = ImportRegistry::new();
        let mut current = Cow::Borrowed(input);

        for (name, pass) in &self.passes {
            let next = match pass.rewrite(current.as_ref(), &mut imports) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(text) => text,
            };
            log::debug!("pass {} rewrote document ({} imports so far)", name, imports.len());
            current = Cow::Owned(next);
        }

        let with_imports = insert_imports(&current, &imports, self.import_line);
        if self.frontmatter {
            apply_frontmatter(&with_imports)
        } else {
            with_imports
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("passes", &self.pass_names().collect::<Vec<_>>())
            .field("import_line", &self.import_line)
            .field("frontmatter", &self.frontmatter)
            .finish()
    }
}

/// Converts `input` with the standard pipeline for `mode`.
pub fn convert(input: &str, mode: ConversionMode, options: &ConvertOptions) -> String {
    Pipeline::for_mode(mode, options).run(input)
}

/// Resolves `path` through `resolver` and converts the loaded text.
pub fn convert_document<R>(
    resolver: &R,
    path: &Path,
    pipeline: &Pipeline,
) -> Result<String, ConvertError>
where
    R: ContentResolver + ?Sized,
{
    let source = resolver.resolve(path)?;
    Ok(pipeline.run(&source))
}

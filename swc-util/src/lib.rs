use anyhow::{Context as _, anyhow, bail};
use swc_common::{FileName, SourceMap, sync::Lrc};
use swc_ecma_ast::{EsVersion, Program};
use swc_ecma_codegen::{Config, Emitter, Node, text_writer::JsWriter};
use swc_ecma_parser::{Syntax, parse_file_as_module};
use tracing::debug;

pub mod guard;

/// The tree a pipeline run works on, together with the source map it was
/// parsed into.
pub struct Context {
    pub ast: Program,
    pub cm: Lrc<SourceMap>,
}
impl Context {
    pub fn new(ast: Program, cm: Lrc<SourceMap>) -> Self {
        Self { ast, cm }
    }
    pub fn parse(name: &str, src: &str) -> anyhow::Result<Self> {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Custom(name.to_owned()).into(),
            src.to_owned(),
        );
        let mut recovered = vec![];
        let module = parse_file_as_module(
            &fm,
            Syntax::Es(Default::default()),
            EsVersion::latest(),
            None,
            &mut recovered,
        )
        .map_err(|e| anyhow!("{:?}", e.kind()))
        .with_context(|| format!("in parsing {name}"))?;
        if let Some(e) = recovered.into_iter().next() {
            return Err(anyhow!("{:?}", e.kind())).with_context(|| format!("in parsing {name}"));
        }
        Ok(Self {
            ast: Program::Module(module),
            cm,
        })
    }
    /// Minified output; stable across span differences, which makes it the
    /// form to compare trees by.
    pub fn to_code(&self) -> anyhow::Result<String> {
        let mut buf = vec![];
        {
            let mut emitter = Emitter {
                cfg: Config::default().with_minify(true),
                cm: self.cm.clone(),
                comments: None,
                wr: JsWriter::new(self.cm.clone(), "\n", &mut buf, None),
            };
            self.ast
                .emit_with(&mut emitter)
                .context("in emitting the program")?;
        }
        Ok(String::from_utf8(buf)?)
    }
}

pub trait Transformer {
    fn name(&self) -> &str;
    fn transform(&mut self, context: &mut Context) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct Pipeline {
    pub transformers: Vec<Box<dyn Transformer>>,
}
impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }
    /// Runs every transformer once, in order.
    pub fn run(&mut self, context: &mut Context) -> anyhow::Result<()> {
        for transformer in self.transformers.iter_mut() {
            debug!(transformer = transformer.name(), "running transformer");
            transformer
                .transform(context)
                .with_context(|| format!("in transformer {}", transformer.name()))?;
        }
        Ok(())
    }
    /// Re-runs the whole pipeline until a round leaves the tree unchanged.
    /// Returns the number of rounds that changed something.
    pub fn run_until_stable(
        &mut self,
        context: &mut Context,
        max_rounds: usize,
    ) -> anyhow::Result<usize> {
        for round in 0..max_rounds {
            let before = context.ast.clone();
            self.run(context)?;
            if context.ast == before {
                debug!(round, "pipeline reached a fixpoint");
                return Ok(round);
            }
        }
        bail!("pipeline did not stabilise within {max_rounds} rounds")
    }
}

use crate::context::Context;
use crate::machine::Crisp8;
use crate::quirks::Quirks;

pub struct Builder<'a, C: Context> {
    context: Option<C>,
    program: Option<&'a [u8]>,
    quirks: Quirks,
}

impl<'a, C: Context> Builder<'a, C> {
    pub fn new() -> Self {
        Self {
            context: None,
            program: None,
            quirks: Quirks::default(),
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    pub fn with_program(mut self, prog: &'a [u8]) -> Self {
        self.program = Some(prog);
        self
    }

    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn build(self) -> Result<Crisp8<C>, &'static str> {
        let context = self.context.ok_or("Context not provided")?;
        let program = self.program.ok_or("Program not provided")?;
        let mut chip = Crisp8::new(context);
        chip.set_quirks(self.quirks);
        chip.load(program).map_err(|e| e.as_str())?;
        Ok(chip)
    }
}

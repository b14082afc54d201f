use crate::profile::{ClassHeader, MethodHeader};
use crate::session::GenerationSession;

impl GenerationSession {
    // =========================================================================
    // Structural Constructs
    // =========================================================================

    /// `@Name` on primary-style targets, an inert `/*Name*/` elsewhere.
    pub fn gen_annotation(&mut self, name: &str) {
        let text = (self.profile().annotation)(name);
        self.append(&text);
    }

    /// Emit an access modifier. Modifiers the target has no equivalent for
    /// produce no output.
    pub fn gen_modifier(&mut self, modifier: &str) {
        match (self.profile().modifier)(modifier) {
            Some(text) => self.append(&text),
            None => self.note_unsupported(format!(
                "modifier '{modifier}' has no {} equivalent and was dropped",
                self.language()
            )),
        }
    }

    /// Open a class declaration. Only the first superclass is used.
    pub fn gen_class_start(
        &mut self,
        modifier: Option<&str>,
        name: &str,
        super_classes: &[&str],
        super_interfaces: &[&str],
    ) {
        if let Some(modifier) = modifier
            && self.language().is_split()
        {
            self.note_unsupported(format!(
                "class modifier '{modifier}' has no {} equivalent and was dropped",
                self.language()
            ));
        }
        if super_classes.len() > 1 {
            self.note_unsupported(format!(
                "class '{name}' lists {} superclasses; only '{}' is used",
                super_classes.len(),
                super_classes[0]
            ));
        }
        let header = ClassHeader {
            modifier,
            name,
            super_classes: &super_classes[..super_classes.len().min(1)],
            super_interfaces,
        };
        let text = (self.profile().class_header)(&header);
        self.append(&text);
    }

    /// Emit a method header.
    ///
    /// Primary-style targets get the signature once, in place. Split-style
    /// targets get a prototype in the include buffer and a qualified
    /// definition in the main buffer, which is left active.
    pub fn generate_method_def_header(
        &mut self,
        mods_and_return_type: &str,
        class_name: Option<&str>,
        name_and_params: &str,
        exceptions: Option<&str>,
    ) {
        let header = MethodHeader {
            mods_and_return_type,
            class_name,
            name_and_params,
            exceptions,
        };
        (self.profile().method_header)(&mut self.buffers, &header);
    }
}

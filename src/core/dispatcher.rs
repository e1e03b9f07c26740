use crate::core::formatters::{print_formatted, ASK, EXCLAIM};
use crate::domain::functions::{DualFunction, EmptyFunction, StringFunction};
use crate::domain::model::{SampleSequence, Selector};
use crate::utils::error::Result;
use std::io::Write;

/// Runs one demonstration branch and the shared closing line against a sink.
pub struct Dispatcher<W: Write> {
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, selector: Selector) -> Result<()> {
        tracing::debug!("Dispatching selector: {:?}", selector);

        match selector {
            Selector::NoParameters | Selector::Fallback => self.no_parameters()?,
            Selector::Message => self.message()?,
            Selector::Product => self.product()?,
            Selector::ListForEach => self.list_for_each()?,
            Selector::ConsumerForEach => self.consumer_for_each()?,
            Selector::LocalFunctions => self.local_functions()?,
            Selector::StaticFunctions => self.static_functions()?,
        }

        print_formatted(&mut self.out, "All done", &EXCLAIM)?;
        self.out.flush()?;
        Ok(())
    }

    fn no_parameters(&mut self) -> Result<()> {
        let out = &mut self.out;
        let mut empty = || -> Result<()> {
            writeln!(out, "No parameters here!")?;
            Ok(())
        };
        empty.run()
    }

    fn message(&mut self) -> Result<()> {
        let write_message = |message: &str| format!("The message is as follows:\n{message}");

        let message =
            write_message.transform("Tada!  This is the result of another Lambda Expression");
        let message = EXCLAIM.transform(&message);
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn product(&mut self) -> Result<()> {
        let multiplication = |a: i32, b: i32| a * b;

        let (a, b) = (99, 101);
        let product = multiplication.combine(a, b);
        writeln!(self.out, "The product of {} and {} is {}", a, b, product)?;
        Ok(())
    }

    fn list_for_each(&mut self) -> Result<()> {
        let list = SampleSequence::new();
        let out = &mut self.out;
        list.for_each(|n: f64| -> Result<()> {
            writeln!(out, "Next guess is: {}", n)?;
            Ok(())
        })
    }

    fn consumer_for_each(&mut self) -> Result<()> {
        let list = SampleSequence::new();
        let out = &mut self.out;
        let method = |n: f64| -> Result<()> {
            writeln!(out, "Consumer says the next guess is: {}", n)?;
            Ok(())
        };
        list.for_each(method)
    }

    fn local_functions(&mut self) -> Result<()> {
        let exclamatory = |n: &str| format!("{n}!");
        let interrogative = |n: &str| format!("{n}?");

        print_formatted(&mut self.out, "Local hello", &exclamatory)?;
        print_formatted(&mut self.out, "Local hello", &interrogative)
    }

    fn static_functions(&mut self) -> Result<()> {
        print_formatted(&mut self.out, "Static hello", &EXCLAIM)?;
        print_formatted(&mut self.out, "Static hello", &ASK)
    }
}

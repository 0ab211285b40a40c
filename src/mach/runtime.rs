use super::{Control, DataPool, Function, Operation, Snapshot, Stack, Val, Var};
use crate::error;
use crate::lang::ast::*;
use crate::lang::{Error, Ident, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// Console lines are padded to multiples of this by a PRINT comma.
pub const ZONE_WIDTH: usize = 15;

const INPUT_PROMPT: &str = "? ";

const MAX_TAB_COLUMN: f64 = 255.0;

const MAX_DIM_SIZE: f64 = u32::MAX as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ready,
    Running,
    Paused,
    Finished,
}

/// What happened on the way out of `step`, `run` or `supply_input`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One statement completed and more remain.
    Stepped,
    /// An INPUT statement is waiting for `supply_input` with this token.
    Input(InputRequest),
    Paused,
    /// END, STOP, running off the last line, or a stop request.
    Finished,
    /// A runtime error halted the program. It is also on the console.
    Error(Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRequest {
    pub token: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForLoop {
    pub variable: String,
    pub current: f64,
    pub end: f64,
    pub step: f64,
    /// Program counter of the FOR line; NEXT resumes just after it.
    pub return_counter: usize,
}

pub type InputCallback = Box<dyn FnMut(&str) -> Option<String> + Send>;
pub type StepCallback = Box<dyn FnMut(&Snapshot) + Send>;

#[derive(Debug, Clone, Copy)]
struct PendingInput {
    token: u64,
    target: usize,
}

/// ## BASIC interpreter
///
/// Executes a [`ProgramNode`] one line at a time. All mutable execution
/// state lives in `State`, which `reset` replaces wholesale.

pub struct Interpreter {
    program: ProgramNode,
    line_index: HashMap<LineNumber, usize>,
    seed: Option<u64>,
    delay: Duration,
    control: Control,
    input_callback: Option<InputCallback>,
    step_callback: Option<StepCallback>,
    state: State,
}

struct State {
    status: Status,
    pc: usize,
    current_line: Option<LineNumber>,
    var: Var,
    for_loops: BTreeMap<String, ForLoop>,
    call_stack: Stack<usize>,
    data: DataPool,
    console: Vec<String>,
    line_open: bool,
    pending: Option<PendingInput>,
    next_token: u64,
    rng: StdRng,
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("lines", &self.program.lines.len())
            .field("status", &self.state.status)
            .field("pc", &self.state.pc)
            .finish()
    }
}

impl Interpreter {
    pub fn new(program: ProgramNode) -> Interpreter {
        let mut line_index = HashMap::new();
        for (index, line) in program.lines.iter().enumerate() {
            line_index.insert(line.line_number, index);
        }
        let state = State::new(&program, None, 1);
        Interpreter {
            program,
            line_index,
            seed: None,
            delay: Duration::from_millis(0),
            control: Control::new(),
            input_callback: None,
            step_callback: None,
            state,
        }
    }

    /// Seed `RND` so runs can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Interpreter {
        self.seed = Some(seed);
        self.state.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Delay between statements while in `run`.
    pub fn set_speed(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(delay_ms);
    }

    pub fn set_input_callback(&mut self, callback: InputCallback) {
        self.input_callback = Some(callback);
    }

    pub fn set_step_callback(&mut self, callback: StepCallback) {
        self.step_callback = Some(callback);
    }

    pub fn control(&self) -> Control {
        self.control.clone()
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn console(&self) -> &[String] {
        &self.state.console
    }

    /// A stop requested through a [`Control`] handle shows up here before
    /// the interpreter is next driven.
    pub fn state(&self) -> Snapshot {
        let mut snapshot = self.state.snapshot();
        if self.control.is_stopped() {
            snapshot.awaiting_input = None;
            snapshot.is_running = false;
            snapshot.is_paused = false;
            snapshot.is_finished = true;
        }
        snapshot
    }

    /// Execute one statement. From `Ready` this leaves the interpreter
    /// `Paused`.
    pub fn step(&mut self) -> Event {
        if self.control.is_stopped() && self.state.status != Status::Finished {
            self.halt();
            return Event::Finished;
        }
        if self.state.status == Status::Ready {
            self.state.status = Status::Paused;
        }
        self.execute()
    }

    /// Step until the program finishes, errors, pauses, is stopped, or needs
    /// input that no callback can answer.
    pub fn run(&mut self) -> Event {
        if self.state.status == Status::Finished {
            return Event::Finished;
        }
        self.control.resume();
        self.state.status = Status::Running;
        tracing::info!(pc = self.state.pc, "run");
        loop {
            if self.control.is_stopped() {
                self.halt();
                return Event::Finished;
            }
            if self.control.is_paused() {
                self.state.status = Status::Paused;
                tracing::info!(pc = self.state.pc, "paused");
                return Event::Paused;
            }
            match self.execute() {
                Event::Stepped => {}
                Event::Input(request) => {
                    let answer = match self.input_callback.as_mut() {
                        Some(callback) => callback(&request.prompt),
                        None => return Event::Input(request),
                    };
                    if self.control.is_stopped() {
                        continue;
                    }
                    let text = match answer {
                        Some(text) => text,
                        None => {
                            self.halt();
                            return Event::Finished;
                        }
                    };
                    match self.supply_input(request.token, &text) {
                        Ok(Event::Stepped) | Ok(Event::Input(_)) => {}
                        Ok(event) => return event,
                        Err(error) => return Event::Error(error),
                    }
                }
                event => {
                    tracing::info!(line = ?self.state.current_line, "run finished");
                    return event;
                }
            }
            self.control.wait(self.delay);
        }
    }

    /// Answer a pending INPUT request. Returns another `Event::Input` while
    /// the statement has targets left, then `Event::Stepped` once it is done.
    pub fn supply_input(&mut self, token: u64, text: &str) -> Result<Event> {
        if self.control.is_stopped() {
            self.halt();
        }
        let pending = match self.state.pending {
            Some(pending) if pending.token == token => pending,
            _ => return Err(error!(InternalError; "NO INPUT PENDING FOR TOKEN")),
        };
        let line = match self.program.lines.get(self.state.pc) {
            Some(line) => line,
            None => return Err(error!(InternalError; "INPUT LINE VANISHED")),
        };
        let targets = match input_targets(&line.statement) {
            Some(targets) => targets,
            None => return Err(error!(InternalError; "NOT AN INPUT STATEMENT")),
        };
        let state = &mut self.state;
        let event = match targets.get(pending.target) {
            Some(target) => match state.input(target, text) {
                Err(error) => state.fail(line.line_number, error),
                Ok(()) if pending.target + 1 < targets.len() => {
                    return Ok(Event::Input(state.request_input(pending.target + 1)));
                }
                Ok(()) => {
                    state.pending = None;
                    state.pc += 1;
                    Event::Stepped
                }
            },
            None => return Err(error!(InternalError; "INPUT TARGET OUT OF RANGE")),
        };
        self.notify();
        Ok(event)
    }

    pub fn pause(&mut self) {
        self.control.pause();
        if self.state.status != Status::Finished {
            self.state.status = Status::Paused;
        }
    }

    /// Finish now. A pending INPUT prompt is discarded.
    pub fn stop(&mut self) {
        self.control.stop();
        self.halt();
    }

    /// Back to a fresh `Ready` state, keeping speed, seed and callbacks.
    pub fn reset(&mut self) {
        let next_token = self.state.next_token;
        self.state = State::new(&self.program, self.seed, next_token);
        self.control.reset();
        tracing::debug!("reset");
    }

    fn halt(&mut self) {
        if self.state.status != Status::Finished {
            tracing::info!(line = ?self.state.current_line, "stopped");
        }
        self.state.status = Status::Finished;
        self.state.pending = None;
    }

    fn notify(&mut self) {
        if let Some(callback) = self.step_callback.as_mut() {
            callback(&self.state.snapshot());
        }
    }

    fn execute(&mut self) -> Event {
        if self.state.status == Status::Finished {
            return Event::Finished;
        }
        if let Some(pending) = self.state.pending {
            return Event::Input(InputRequest {
                token: pending.token,
                prompt: INPUT_PROMPT.to_string(),
            });
        }
        let state = &mut self.state;
        state.var.clear_recent();
        let event = match self.program.lines.get(state.pc) {
            None => {
                state.status = Status::Finished;
                Event::Finished
            }
            Some(line) => {
                state.current_line = Some(line.line_number);
                tracing::debug!(line = line.line_number, pc = state.pc, "execute");
                match state.statement(&self.line_index, &line.statement) {
                    Err(error) => state.fail(line.line_number, error),
                    Ok(()) => match state.pending {
                        Some(pending) => Event::Input(InputRequest {
                            token: pending.token,
                            prompt: INPUT_PROMPT.to_string(),
                        }),
                        None if state.status == Status::Finished => Event::Finished,
                        None => Event::Stepped,
                    },
                }
            }
        };
        self.notify();
        event
    }
}

/// The targets of an INPUT, looking through IF ... THEN INPUT.
fn input_targets(statement: &StatementNode) -> Option<&[Variable]> {
    match statement {
        StatementNode::Input { targets } => Some(targets),
        StatementNode::If { then, .. } => input_targets(then),
        _ => None,
    }
}

/// Reads the longest leading number in an INPUT answer, or 0 if there is none.
fn leading_number(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    let mut end = 0;
    if let Some(b'+') | Some(b'-') = bytes.first() {
        end = 1;
    }
    let int_end = digits(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits(int_end + 1);
    }
    if int_end == end && mantissa_end <= int_end + 1 {
        return 0.0;
    }
    end = mantissa_end;
    if let Some(b'E') | Some(b'e') = bytes.get(end) {
        let mut i = end + 1;
        if let Some(b'+') | Some(b'-') = bytes.get(i) {
            i += 1;
        }
        let exp_end = digits(i);
        if exp_end > i {
            end = exp_end;
        }
    }
    match text[..end].parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

impl State {
    fn new(program: &ProgramNode, seed: Option<u64>, next_token: u64) -> State {
        State {
            status: Status::Ready,
            pc: 0,
            current_line: None,
            var: Var::new(),
            for_loops: BTreeMap::new(),
            call_stack: Stack::new("TOO MANY NESTED GOSUBS"),
            data: DataPool::new(program),
            console: vec![],
            line_open: false,
            pending: None,
            next_token,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_line: self.current_line,
            program_counter: self.pc,
            is_running: self.status == Status::Running,
            is_paused: self.status == Status::Paused,
            is_finished: self.status == Status::Finished,
            awaiting_input: self.pending.map(|pending| InputRequest {
                token: pending.token,
                prompt: INPUT_PROMPT.to_string(),
            }),
            variables: self.var.variables().clone(),
            arrays: self.var.arrays().clone(),
            for_loops: self.for_loops.clone(),
            call_stack: self.call_stack.as_slice().to_vec(),
            console: self.console.clone(),
            console_open: self.line_open,
            data_pointer: self.data.pointer(),
            data_values: self.data.values().to_vec(),
            recently_changed: self.var.recently_changed().clone(),
        }
    }

    fn fail(&mut self, line: LineNumber, error: Error) -> Event {
        tracing::warn!(line, %error, "runtime error");
        self.console.push(format!("ERROR at line {}: {}", line, error));
        self.line_open = false;
        self.status = Status::Finished;
        self.pending = None;
        Event::Error(error.in_line_number(line))
    }

    fn request_input(&mut self, target: usize) -> InputRequest {
        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(PendingInput { token, target });
        InputRequest {
            token,
            prompt: INPUT_PROMPT.to_string(),
        }
    }

    fn find(&self, line_index: &HashMap<LineNumber, usize>, line: LineNumber) -> Result<usize> {
        match line_index.get(&line) {
            Some(pc) => Ok(*pc),
            None => Err(error!(UndefinedLine; line.to_string())),
        }
    }

    fn statement(
        &mut self,
        line_index: &HashMap<LineNumber, usize>,
        statement: &StatementNode,
    ) -> Result<()> {
        use StatementNode::*;
        match statement {
            Let { target, value } => {
                let value = self.expression(value)?;
                self.assign(target, value)?;
                self.pc += 1;
            }
            Print { items } => {
                self.print(items)?;
                self.pc += 1;
            }
            Input { .. } => {
                self.request_input(0);
            }
            For {
                variable,
                start,
                end,
                step,
            } => {
                self.r#for(variable, start, end, step.as_ref())?;
                self.pc += 1;
            }
            Next { variable } => self.next(variable)?,
            If { condition, then } => {
                if self.expression(condition)?.is_truthy() {
                    self.statement(line_index, then)?;
                } else {
                    self.pc += 1;
                }
            }
            Goto { line } => self.pc = self.find(line_index, *line)?,
            Gosub { line } => {
                let target = self.find(line_index, *line)?;
                self.call_stack.push(self.pc + 1)?;
                self.pc = target;
            }
            Return => {
                if self.call_stack.is_empty() {
                    return Err(error!(ReturnWithoutGosub));
                }
                self.pc = self.call_stack.pop()?;
            }
            Dim { arrays } => {
                for decl in arrays {
                    self.dim(decl)?;
                }
                self.pc += 1;
            }
            Read { targets } => {
                for target in targets {
                    let value = self.data.read()?;
                    self.assign(target, value)?;
                }
                self.pc += 1;
            }
            Restore => {
                self.data.restore();
                self.pc += 1;
            }
            Data { .. } | Rem { .. } => self.pc += 1,
            End | Stop => self.status = Status::Finished,
        }
        Ok(())
    }

    fn assign(&mut self, target: &Variable, value: Val) -> Result<()> {
        match target {
            Variable::Scalar(ident) => self.var.store(ident, value, self.current_line),
            Variable::Array(ident, indices) => {
                let indices = self.indices(indices)?;
                self.var
                    .store_array(ident, indices, value, self.current_line)
            }
        }
    }

    fn input(&mut self, target: &Variable, text: &str) -> Result<()> {
        let value = if target.ident().is_string() {
            Val::String(text.to_string())
        } else {
            Val::Number(leading_number(text))
        };
        self.assign(target, value)
    }

    fn r#for(
        &mut self,
        variable: &Ident,
        start: &ExpressionNode,
        end: &ExpressionNode,
        step: Option<&ExpressionNode>,
    ) -> Result<()> {
        let start = f64::try_from(self.expression(start)?)?;
        let end = f64::try_from(self.expression(end)?)?;
        let step = match step {
            Some(step) => f64::try_from(self.expression(step)?)?,
            None => 1.0,
        };
        self.var
            .store(variable, Val::Number(start), self.current_line)?;
        let name = variable.to_string();
        self.for_loops.insert(
            name.clone(),
            ForLoop {
                variable: name,
                current: start,
                end,
                step,
                return_counter: self.pc,
            },
        );
        Ok(())
    }

    fn next(&mut self, variable: &Ident) -> Result<()> {
        let name = variable.to_string();
        let (current, again, return_counter) = match self.for_loops.get_mut(&name) {
            Some(for_loop) => {
                for_loop.current += for_loop.step;
                let again = if for_loop.step > 0.0 {
                    for_loop.current <= for_loop.end
                } else {
                    for_loop.current >= for_loop.end
                };
                (for_loop.current, again, for_loop.return_counter)
            }
            None => return Err(error!(NextWithoutFor; name)),
        };
        self.var
            .store(variable, Val::Number(current), self.current_line)?;
        if again {
            self.pc = return_counter + 1;
        } else {
            self.for_loops.remove(&name);
            self.pc += 1;
        }
        Ok(())
    }

    fn dim(&mut self, decl: &ArrayDecl) -> Result<()> {
        let mut sizes: Vec<usize> = vec![];
        for expr in &decl.dimensions {
            let size = match expr {
                ExpressionNode::Number(n) => *n,
                _ => return Err(error!(DomainError; "DIM SIZE MUST BE A NUMBER")),
            };
            if !(size >= 1.0) {
                return Err(error!(DomainError; "DIM SIZE MUST BE POSITIVE"));
            }
            if size > MAX_DIM_SIZE {
                return Err(error!(DomainError; "DIM SIZE TOO LARGE"));
            }
            sizes.push(size.floor() as usize);
        }
        self.var
            .dimension_array(&decl.name, sizes, self.current_line)
    }

    fn print(&mut self, items: &[PrintItem]) -> Result<()> {
        let mut out = match (self.line_open, self.console.last()) {
            (true, Some(last)) => last.clone(),
            _ => String::new(),
        };
        let mut after_expression = false;
        for item in items {
            match item {
                PrintItem::Expression(expr) => {
                    if after_expression {
                        out.push(' ');
                    }
                    match expr {
                        ExpressionNode::Function(crate::lang::Function::Tab, arg) => {
                            let column = f64::try_from(self.expression(arg)?)?;
                            if column >= 1.0 {
                                pad_to(&mut out, column.min(MAX_TAB_COLUMN) as usize - 1);
                            }
                        }
                        _ => out.push_str(&self.expression(expr)?.to_string()),
                    }
                    after_expression = true;
                }
                PrintItem::Comma => {
                    let width = out.chars().count();
                    pad_to(&mut out, (width / ZONE_WIDTH + 1) * ZONE_WIDTH);
                    after_expression = false;
                }
                PrintItem::Semicolon => after_expression = false,
            }
        }
        if self.line_open {
            self.console.pop();
        }
        self.console.push(out);
        self.line_open = match items.last() {
            Some(PrintItem::Comma) | Some(PrintItem::Semicolon) => true,
            _ => false,
        };
        Ok(())
    }

    fn indices(&mut self, exprs: &[ExpressionNode]) -> Result<Vec<f64>> {
        let mut v: Vec<f64> = vec![];
        for expr in exprs {
            v.push(f64::try_from(self.expression(expr)?)?);
        }
        Ok(v)
    }

    fn expression(&mut self, expr: &ExpressionNode) -> Result<Val> {
        match expr {
            ExpressionNode::Number(n) => Ok(Val::Number(*n)),
            ExpressionNode::String(s) => Ok(Val::String(s.clone())),
            ExpressionNode::Variable(ident) => Ok(self.var.fetch(ident)),
            ExpressionNode::Array(ident, indices) => {
                let indices = self.indices(indices)?;
                self.var.fetch_array(ident, indices)
            }
            ExpressionNode::Function(function, arg) => {
                let arg = self.expression(arg)?;
                Function::call(*function, arg, &mut self.rng)
            }
            ExpressionNode::Unary(op, operand) => {
                let operand = self.expression(operand)?;
                match op {
                    UnaryOp::Negate => Operation::negate(operand),
                    UnaryOp::Not => Operation::not(operand),
                }
            }
            ExpressionNode::Binary(op, lhs, rhs) => {
                let lhs = self.expression(lhs)?;
                let rhs = self.expression(rhs)?;
                use BinaryOp::*;
                match op {
                    Add => Operation::sum(lhs, rhs),
                    Subtract => Operation::subtract(lhs, rhs),
                    Multiply => Operation::multiply(lhs, rhs),
                    Divide => Operation::divide(lhs, rhs),
                    Power => Operation::power(lhs, rhs),
                    Equal => Operation::equal(lhs, rhs),
                    NotEqual => Operation::not_equal(lhs, rhs),
                    Less => Operation::less(lhs, rhs),
                    LessEqual => Operation::less_equal(lhs, rhs),
                    Greater => Operation::greater(lhs, rhs),
                    GreaterEqual => Operation::greater_equal(lhs, rhs),
                    And => Operation::and(lhs, rhs),
                    Or => Operation::or(lhs, rhs),
                }
            }
        }
    }
}

fn pad_to(s: &mut String, width: usize) {
    let len = s.chars().count();
    if len < width {
        s.extend(std::iter::repeat(' ').take(width - len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::parse_program;

    fn interpreter(source: &str) -> Interpreter {
        Interpreter::new(parse_program(source).unwrap()).with_seed(0)
    }

    #[test]
    fn test_hello() {
        let mut r = interpreter("10 PRINT \"HI\"\n20 END\n");
        assert_eq!(r.run(), Event::Finished);
        assert_eq!(r.console(), &["HI".to_string()]);
        let state = r.state();
        assert!(state.is_finished);
        assert!(!state.is_running);
    }

    #[test]
    fn test_step_from_ready_pauses() {
        let mut r = interpreter("10 LET A = 1\n20 LET B = 2\n");
        assert_eq!(r.status(), Status::Ready);
        assert_eq!(r.step(), Event::Stepped);
        assert_eq!(r.status(), Status::Paused);
        let state = r.state();
        assert_eq!(state.current_line, Some(10));
        assert_eq!(state.program_counter, 1);
        assert!(state.recently_changed.contains("A"));
        assert_eq!(r.step(), Event::Stepped);
        assert!(!r.state().recently_changed.contains("A"));
        assert_eq!(r.step(), Event::Finished);
        assert_eq!(r.step(), Event::Finished);
    }

    #[test]
    fn test_error_line() {
        let mut r = interpreter("10 PRINT 1;\n20 NEXT J\n");
        match r.run() {
            Event::Error(e) => {
                assert_eq!(e.code(), crate::lang::ErrorCode::NextWithoutFor);
                assert_eq!(e.line_number(), Some(20));
            }
            other => panic!("{:?}", other),
        }
        assert_eq!(
            r.console(),
            &[
                "1".to_string(),
                "ERROR at line 20: NEXT WITHOUT FOR; J".to_string()
            ]
        );
        assert_eq!(r.status(), Status::Finished);
    }

    #[test]
    fn test_print_zones_and_tab() {
        let mut r = interpreter("10 PRINT 1, 2; 3 4\n20 PRINT TAB(5); \"X\"\n");
        r.run();
        assert_eq!(
            r.console(),
            &["1              23 4".to_string(), "    X".to_string()]
        );
    }

    #[test]
    fn test_input_two_phase() {
        let mut r = interpreter("10 INPUT A, B$\n20 PRINT A; B$\n");
        let request = match r.run() {
            Event::Input(request) => request,
            other => panic!("{:?}", other),
        };
        assert_eq!(request.prompt, "? ");
        assert!(r.state().is_running);
        assert!(r.supply_input(request.token + 99, "1").is_err());
        let request = match r.supply_input(request.token, "12") {
            Ok(Event::Input(next)) => next,
            other => panic!("{:?}", other),
        };
        assert_eq!(r.step(), Event::Input(request.clone()));
        assert_eq!(r.supply_input(request.token, "ADA"), Ok(Event::Stepped));
        assert_eq!(r.run(), Event::Finished);
        assert_eq!(r.console(), &["12ADA".to_string()]);
    }

    #[test]
    fn test_stop_discards_input() {
        let mut r = interpreter("10 INPUT A\n20 PRINT A\n");
        let request = match r.run() {
            Event::Input(request) => request,
            other => panic!("{:?}", other),
        };
        r.stop();
        assert!(r.state().awaiting_input.is_none());
        assert!(r.supply_input(request.token, "1").is_err());
        assert_eq!(r.run(), Event::Finished);
        assert!(r.console().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut r = interpreter("10 LET A = 5\n20 PRINT A\n");
        r.run();
        r.reset();
        let state = r.state();
        assert_eq!(r.status(), Status::Ready);
        assert!(state.console.is_empty());
        assert!(state.variables.is_empty());
        assert_eq!(state.program_counter, 0);
        r.run();
        assert_eq!(r.console(), &["5".to_string()]);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12abc"), 12.0);
        assert_eq!(leading_number(" -2.5E2X "), -250.0);
        assert_eq!(leading_number("7E"), 7.0);
        assert_eq!(leading_number(".5"), 0.5);
        assert_eq!(leading_number("3."), 3.0);
        assert_eq!(leading_number("twelve"), 0.0);
        assert_eq!(leading_number("-."), 0.0);
        assert_eq!(leading_number(""), 0.0);
        assert_eq!(leading_number("1E999"), 0.0);
    }
}

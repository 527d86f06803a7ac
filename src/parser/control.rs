use crate::ast::{Case, Condition, ControlStatement, RelOp, Statement};
use crate::lexer::TokenKind;
use crate::parser::{Parser, SyntaxError};

impl Parser<'_> {
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<Statement>, SyntaxError> {
        let mut statements = vec![];
        while self.is_statement() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    // STATEMENT --> SUPER_STATEMENT | STRUCT_STATEMENT
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        if self.is_super_statement() {
            Ok(Statement::Super(self.parse_super_statement()?))
        } else if self.is_struct_statement() {
            Ok(Statement::Control(self.parse_struct_statement()?))
        } else {
            Err(self.error_at_lookahead("statement"))
        }
    }

    pub(crate) fn is_statement(&self) -> bool {
        self.is_super_statement() || self.is_struct_statement()
    }

    // STRUCT_STATEMENT --> IF | WHILE | DO_WHILE | FOR | BLOCK | RETURN | SWITCH
    pub(crate) fn parse_struct_statement(&mut self) -> Result<ControlStatement, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::If) => self.parse_if(),
            Some(TokenKind::While) => self.parse_while(),
            Some(TokenKind::Do) => self.parse_do_while(),
            Some(TokenKind::For) => self.parse_for(),
            Some(TokenKind::OpenCurlyBracket) => self.parse_block(),
            Some(TokenKind::Return) => self.parse_return(),
            Some(TokenKind::Switch) => self.parse_switch(),
            _ => Err(self.error_at_lookahead("statement")),
        }
    }

    pub(crate) fn is_struct_statement(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(
                TokenKind::If
                    | TokenKind::While
                    | TokenKind::Do
                    | TokenKind::For
                    | TokenKind::OpenCurlyBracket
                    | TokenKind::Return
                    | TokenKind::Switch
            )
        )
    }

    // IF --> if ( CONDITION ) STATEMENT ( else STATEMENT )?
    fn parse_if(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::OpenRoundBracket)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::CloseRoundBracket)?;
        let body = Box::new(self.parse_statement()?);

        let else_body = if self.at(TokenKind::Else) {
            self.expect(TokenKind::Else)?;
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(ControlStatement::If {
            condition,
            body,
            else_body,
        })
    }

    // WHILE --> while ( CONDITION ) STATEMENT
    fn parse_while(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::OpenRoundBracket)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::CloseRoundBracket)?;
        let body = Box::new(self.parse_statement()?);

        Ok(ControlStatement::While { condition, body })
    }

    // DO_WHILE --> do STATEMENT while ( CONDITION ) ;
    fn parse_do_while(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::Do)?;
        let body = Box::new(self.parse_statement()?);
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::OpenRoundBracket)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::CloseRoundBracket)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(ControlStatement::DoWhile { body, condition })
    }

    // FOR --> for ( INLINE_STATEMENT ; CONDITION ; INLINE_STATEMENT ) STATEMENT
    fn parse_for(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::OpenRoundBracket)?;
        let prefix = self.parse_inline_statement()?;
        self.expect(TokenKind::Semicolon)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Semicolon)?;
        let repeat = self.parse_inline_statement()?;
        self.expect(TokenKind::CloseRoundBracket)?;
        let body = Box::new(self.parse_statement()?);

        Ok(ControlStatement::For {
            prefix,
            condition,
            repeat,
            body,
        })
    }

    // BLOCK --> { STATEMENTS }
    fn parse_block(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::OpenCurlyBracket)?;
        let statements = self.parse_statements()?;
        self.expect(TokenKind::CloseCurlyBracket)?;

        Ok(ControlStatement::Block { statements })
    }

    // RETURN --> return EXPRESSION? ;
    fn parse_return(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::Return)?;
        let value = if self.is_expression() {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;

        Ok(ControlStatement::Return { value })
    }

    // SWITCH --> switch { CASES }
    fn parse_switch(&mut self) -> Result<ControlStatement, SyntaxError> {
        self.expect(TokenKind::Switch)?;
        self.expect(TokenKind::OpenCurlyBracket)?;
        let cases = self.parse_cases()?;
        self.expect(TokenKind::CloseCurlyBracket)?;

        Ok(ControlStatement::Switch { cases })
    }

    fn parse_cases(&mut self) -> Result<Vec<Case>, SyntaxError> {
        let mut cases = vec![];
        while matches!(
            self.peek_kind(),
            Some(TokenKind::Case | TokenKind::Default)
        ) {
            cases.push(self.parse_case()?);
        }
        Ok(cases)
    }

    // CASE --> case VALUE : STATEMENT break ; | default : STATEMENT break ;
    fn parse_case(&mut self) -> Result<Case, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Case) => {
                self.expect(TokenKind::Case)?;
                let value = self.parse_value()?;
                self.expect(TokenKind::Colon)?;
                let body = Box::new(self.parse_statement()?);
                self.expect(TokenKind::Break)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Case::Case { value, body })
            }
            Some(TokenKind::Default) => {
                self.expect(TokenKind::Default)?;
                self.expect(TokenKind::Colon)?;
                let body = Box::new(self.parse_statement()?);
                self.expect(TokenKind::Break)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Case::Default { body })
            }
            _ => Err(self.error_at_lookahead("case or default")),
        }
    }

    // CONDITION --> EXPRESSION REL_OPERATOR EXPRESSION | true | false
    pub(crate) fn parse_condition(&mut self) -> Result<Condition, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::True) => {
                self.advance();
                Ok(Condition::Literal { value: true })
            }
            Some(TokenKind::False) => {
                self.advance();
                Ok(Condition::Literal { value: false })
            }
            _ => {
                let left = self.parse_expression()?;
                let operator = self.match_rel_operator()?;
                let right = self.parse_expression()?;
                Ok(Condition::Compare {
                    left,
                    operator,
                    right,
                })
            }
        }
    }

    // REL_OPERATOR --> == | != | < | > | <= | >=
    fn match_rel_operator(&mut self) -> Result<RelOp, SyntaxError> {
        let operator = match self.peek_kind() {
            Some(TokenKind::DoubleEquals) => RelOp::Eq,
            Some(TokenKind::NotEqual) => RelOp::NotEq,
            Some(TokenKind::LessThan) => RelOp::Less,
            Some(TokenKind::GreaterThan) => RelOp::Greater,
            Some(TokenKind::LessThanOrEqual) => RelOp::LessEq,
            Some(TokenKind::GreaterThanOrEqual) => RelOp::GreaterEq,
            _ => return Err(self.error_at_lookahead("relation operator")),
        };
        self.advance();
        Ok(operator)
    }
}

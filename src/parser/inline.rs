use crate::ast::{AssignOp, IncDecOp, InlineStatement, Parameter};
use crate::lexer::TokenKind;
use crate::parser::{Parser, SyntaxError};

impl Parser<'_> {
    // INLINE_STATEMENT --> DECLARE_ASSIGN | DECLARE | INC_DEC | ASSIGN | CALL
    //
    // The predicates below are evaluated in this exact order; several share
    // a token prefix (data_type identifier, identifier '='), so reordering
    // them changes which production wins.
    pub(crate) fn parse_inline_statement(&mut self) -> Result<InlineStatement, SyntaxError> {
        if self.at(TokenKind::DataType) {
            if self.is_declare_assign() {
                self.parse_declare_assign()
            } else {
                self.parse_declare()
            }
        } else if self.is_inc_dec() {
            self.parse_inc_dec()
        } else if self.is_assign() {
            self.parse_assign()
        } else if self.is_call() {
            self.parse_call()
        } else {
            Err(self.error_at_lookahead("statement"))
        }
    }

    pub(crate) fn is_inline_statement(&self) -> bool {
        self.is_declare_assign()
            || self.is_declare()
            || self.is_inc_dec()
            || self.is_assign()
            || self.is_call()
    }

    // DECLARE_ASSIGN --> DATA_TYPE id = EXPRESSION
    fn parse_declare_assign(&mut self) -> Result<InlineStatement, SyntaxError> {
        let data_type = self.expect(TokenKind::DataType)?.text().to_string();
        let variable = self.expect(TokenKind::Identifier)?.text().to_string();
        self.expect(TokenKind::Equal)?;
        let expression = self.parse_expression()?;

        Ok(InlineStatement::DeclareAssign {
            data_type,
            variable,
            expression,
        })
    }

    fn is_declare_assign(&self) -> bool {
        self.lookahead_for(&[TokenKind::DataType, TokenKind::Identifier, TokenKind::Equal])
    }

    // DECLARE --> DATA_TYPE id
    fn parse_declare(&mut self) -> Result<InlineStatement, SyntaxError> {
        let data_type = self.expect(TokenKind::DataType)?.text().to_string();
        let variable = self.expect(TokenKind::Identifier)?.text().to_string();

        Ok(InlineStatement::Declare {
            data_type,
            variable,
        })
    }

    fn is_declare(&self) -> bool {
        self.lookahead_for(&[TokenKind::DataType, TokenKind::Identifier])
    }

    // INC_DEC --> id INC_DEC_OPERATOR
    fn parse_inc_dec(&mut self) -> Result<InlineStatement, SyntaxError> {
        let variable = self.expect(TokenKind::Identifier)?.text().to_string();
        let operator = self.match_inc_dec_operator()?;

        Ok(InlineStatement::IncDec { variable, operator })
    }

    fn is_inc_dec(&self) -> bool {
        self.lookahead_for(&[TokenKind::Identifier, TokenKind::DoublePluses])
            || self.lookahead_for(&[TokenKind::Identifier, TokenKind::DoubleMinuses])
    }

    // ASSIGN --> id ASSIGN_OPERATOR EXPRESSION
    fn parse_assign(&mut self) -> Result<InlineStatement, SyntaxError> {
        let variable = self.expect(TokenKind::Identifier)?.text().to_string();
        let operator = self.match_assign_operator()?;
        let expression = self.parse_expression()?;

        Ok(InlineStatement::Assign {
            variable,
            operator,
            expression,
        })
    }

    fn is_assign(&self) -> bool {
        self.lookahead_for(&[TokenKind::Identifier, TokenKind::Equal])
            || self.lookahead_for(&[TokenKind::Identifier, TokenKind::PlusEqual])
            || self.lookahead_for(&[TokenKind::Identifier, TokenKind::MinusEqual])
    }

    // CALL --> IDS ( EXPRESSIONS )
    fn parse_call(&mut self) -> Result<InlineStatement, SyntaxError> {
        let path = self.parse_ids()?;
        self.expect(TokenKind::OpenRoundBracket)?;
        let arguments = self.parse_expressions()?;
        self.expect(TokenKind::CloseRoundBracket)?;

        Ok(InlineStatement::Call { path, arguments })
    }

    fn is_call(&self) -> bool {
        self.lookahead_for(&[TokenKind::Identifier, TokenKind::Dot])
            || self.lookahead_for(&[TokenKind::Identifier, TokenKind::OpenRoundBracket])
    }

    // IDS --> id ( . id )*
    pub(crate) fn parse_ids(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut ids = vec![self.expect(TokenKind::Identifier)?.text().to_string()];
        while self.at(TokenKind::Dot) {
            self.expect(TokenKind::Dot)?;
            ids.push(self.expect(TokenKind::Identifier)?.text().to_string());
        }
        Ok(ids)
    }

    // DECLARES --> DATA_TYPE id ( , DATA_TYPE id )* | ε
    pub(crate) fn parse_parameters(&mut self) -> Result<Vec<Parameter>, SyntaxError> {
        let mut parameters = vec![];
        if self.at(TokenKind::DataType) {
            loop {
                let data_type = self.expect(TokenKind::DataType)?.text().to_string();
                let variable = self.expect(TokenKind::Identifier)?.text().to_string();
                parameters.push(Parameter {
                    data_type,
                    variable,
                });
                if self.at(TokenKind::Comma) {
                    self.expect(TokenKind::Comma)?;
                } else {
                    break;
                }
            }
        }
        Ok(parameters)
    }

    // EXPRESSIONS --> EXPRESSION ( , EXPRESSION )* | ε
    pub(crate) fn parse_expressions(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut expressions = vec![];
        if self.is_expression() {
            expressions.push(self.parse_expression()?);
            while self.at(TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                expressions.push(self.parse_expression()?);
            }
        }
        Ok(expressions)
    }

    // EXPRESSION --> VALUE | id | ( EXPRESSION )
    //
    // Expressions stay atomic text; parentheses group but add no structure,
    // so the inner text is what the node keeps.
    pub(crate) fn parse_expression(&mut self) -> Result<String, SyntaxError> {
        if self.is_value() {
            self.parse_value()
        } else if self.at(TokenKind::Identifier) {
            Ok(self.expect(TokenKind::Identifier)?.text().to_string())
        } else if self.at(TokenKind::OpenRoundBracket) {
            self.expect(TokenKind::OpenRoundBracket)?;
            let expression = self.parse_expression()?;
            self.expect(TokenKind::CloseRoundBracket)?;
            Ok(expression)
        } else {
            Err(self.error_at_lookahead("expression"))
        }
    }

    pub(crate) fn is_expression(&self) -> bool {
        self.is_value()
            || matches!(
                self.peek_kind(),
                Some(TokenKind::Identifier | TokenKind::OpenRoundBracket)
            )
    }

    // VALUE --> string | number | true | false | null
    pub(crate) fn parse_value(&mut self) -> Result<String, SyntaxError> {
        if !self.is_value() {
            return Err(self.error_at_lookahead("value"));
        }
        match self.advance() {
            Some(token) => Ok(token.text().to_string()),
            None => Err(self.error_at_lookahead("value")),
        }
    }

    pub(crate) fn is_value(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(
                TokenKind::Str
                    | TokenKind::Number
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
            )
        )
    }

    // ASSIGN_OPERATOR --> = | += | -=
    fn match_assign_operator(&mut self) -> Result<AssignOp, SyntaxError> {
        let operator = match self.peek_kind() {
            Some(TokenKind::Equal) => AssignOp::Assign,
            Some(TokenKind::PlusEqual) => AssignOp::AddAssign,
            Some(TokenKind::MinusEqual) => AssignOp::SubAssign,
            _ => return Err(self.error_at_lookahead("assign operator")),
        };
        self.advance();
        Ok(operator)
    }

    // INC_DEC_OPERATOR --> ++ | --
    fn match_inc_dec_operator(&mut self) -> Result<IncDecOp, SyntaxError> {
        let operator = match self.peek_kind() {
            Some(TokenKind::DoublePluses) => IncDecOp::Increment,
            Some(TokenKind::DoubleMinuses) => IncDecOp::Decrement,
            _ => return Err(self.error_at_lookahead("increment/decrement operator")),
        };
        self.advance();
        Ok(operator)
    }
}

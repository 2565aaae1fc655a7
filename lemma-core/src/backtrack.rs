//! # Buffer de Retrocesso
//!
//! Os estágios de composição (locuções, nomes próprios) precisam olhar
//! vários tokens à frente e, se a hipótese falhar, devolver ao fluxo os
//! tokens consumidos a mais. O [`BacktrackBuffer`] guarda cópias próprias
//! desses tokens; os tokens retirados vão para um estoque de reserva e
//! têm seus buffers de texto reaproveitados nas próximas cópias.

use std::collections::VecDeque;

use crate::token::{Token, TokenStream};

const INITIAL_CAPACITY: usize = 8;

/// Fila dupla de cópias de tokens com reaproveitamento de buffers.
#[derive(Debug)]
pub struct BacktrackBuffer {
    queue: VecDeque<Token>,
    spare: Vec<Token>,
}

impl Default for BacktrackBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackBuffer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(INITIAL_CAPACITY),
            spare: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    fn copy_of(&mut self, token: &Token) -> Token {
        let mut slot = self.spare.pop().unwrap_or_default();
        slot.copy_from(token);
        slot
    }

    /// Insere uma cópia de `token` no início.
    pub fn add_first(&mut self, token: &Token) {
        let copy = self.copy_of(token);
        self.queue.push_front(copy);
    }

    /// Insere uma cópia de `token` no fim.
    pub fn add_last(&mut self, token: &Token) {
        let copy = self.copy_of(token);
        self.queue.push_back(copy);
    }

    /// Move o primeiro token para `into`. Retorna `false` se o buffer estiver vazio.
    pub fn remove_first(&mut self, into: &mut Token) -> bool {
        match self.queue.pop_front() {
            Some(mut t) => {
                std::mem::swap(into, &mut t);
                self.spare.push(t);
                true
            }
            None => false,
        }
    }

    /// Move o último token para `into`. Retorna `false` se o buffer estiver vazio.
    pub fn remove_last(&mut self, into: &mut Token) -> bool {
        match self.queue.pop_back() {
            Some(mut t) => {
                std::mem::swap(into, &mut t);
                self.spare.push(t);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, i: usize) -> Option<&Token> {
        self.queue.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Descarta o conteúdo, mantendo os buffers para reuso.
    pub fn clear(&mut self) {
        self.spare.extend(self.queue.drain(..));
    }
}

/// Fonte de tokens com replay: os tokens devolvidos ao [`BacktrackBuffer`]
/// saem antes de qualquer token novo do fluxo de entrada.
pub struct Lookahead<S> {
    input: S,
    replay: BacktrackBuffer,
    scratch: Token,
}

impl<S: TokenStream> Lookahead<S> {
    pub fn new(input: S) -> Self {
        Self {
            input,
            replay: BacktrackBuffer::new(),
            scratch: Token::default(),
        }
    }

    pub fn pull(&mut self, token: &mut Token) -> bool {
        if self.replay.remove_first(token) {
            return true;
        }
        self.input.advance(token)
    }

    /// Esvazia `buffer` de volta para a entrada: seus tokens serão lidos
    /// de novo, na mesma ordem, antes de qualquer token ainda não lido.
    pub fn rewind(&mut self, buffer: &mut BacktrackBuffer) {
        while buffer.remove_last(&mut self.scratch) {
            self.replay.add_first(&self.scratch);
        }
    }
}

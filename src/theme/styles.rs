//! Global CSS styles for the ticket card.
//!
//! White card, black rules, red brand accent. Sizes follow a 0.25rem grid.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK */
  --ink: #000000;
  --paper: #ffffff;

  /* BRAND */
  --brand-red: #dc2626;
  --brand-red-dark: #b91c1c;
  --confirm-green: #16a34a;
  --confirm-green-dark: #15803d;
  --dark-hover: #1f2937;

  /* GRAYS */
  --box-gray: #f3f4f6;
  --caption-gray: #4b5563;
  --rule-gray: #d1d5db;

  /* Typography */
  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: ui-monospace, 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;

  /* Transitions */
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--box-gray);
  color: var(--ink);
}

/* === Page === */
.ticket-page {
  max-width: 28rem;
  margin: 2rem auto;
}

/* === Ticket Surface === */
.ticket {
  background: var(--paper);
  border: 2px solid var(--ink);
  border-radius: 0.5rem;
  padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.ticket__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  border-bottom: 2px solid var(--ink);
  padding-bottom: 1rem;
  margin-bottom: 1rem;
}

.ticket__brand {
  display: flex;
  align-items: center;
}

.ticket__company {
  font-size: var(--text-2xl);
  font-weight: 700;
  line-height: 2rem;
}

.ticket__tagline {
  font-size: var(--text-xs);
  color: var(--brand-red);
}

.ticket__number {
  text-align: right;
}

.ticket__number-value {
  font-size: var(--text-sm);
  font-weight: 600;
}

.ticket__passenger {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  margin-bottom: 1rem;
}

.ticket__route {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
  background: var(--box-gray);
  padding: 0.75rem;
  border: 1px solid var(--ink);
  border-radius: 0.25rem;
}

.ticket__details {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 0.75rem;
  text-align: center;
}

.ticket__detail {
  background: var(--box-gray);
  padding: 0.5rem;
  border: 1px solid var(--ink);
  border-radius: 0.25rem;
}

.ticket__footer {
  margin-top: 1rem;
  padding-top: 1rem;
  border-top: 2px solid var(--ink);
  text-align: center;
  font-size: var(--text-xs);
  color: var(--caption-gray);
}

.ticket__barcode {
  margin-top: 0.75rem;
  display: flex;
  justify-content: center;
}

.ticket__barcode p {
  background: var(--box-gray);
  padding: 0.25rem 1rem;
  border: 1px solid var(--ink);
  border-radius: 0.25rem;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
}

/* === Icons === */
.icon {
  width: 2.5rem;
  height: 2.5rem;
  color: var(--brand-red);
  flex-shrink: 0;
}

.icon--brand {
  margin-right: 0.75rem;
}

.icon--button {
  width: 1.25rem;
  height: 1.25rem;
  margin-right: 0.5rem;
  color: currentColor;
}

/* === Fields === */
.field-label {
  font-size: var(--text-xs);
  color: var(--caption-gray);
}

.field-text,
.field-input {
  color: var(--ink);
}

.field--regular {
  font-size: var(--text-sm);
  font-weight: 600;
}

.field--large {
  font-size: var(--text-lg);
  font-weight: 700;
}

.field--time {
  font-size: var(--text-sm);
  color: var(--brand-red);
}

.field-input {
  width: 100%;
  max-width: 9rem;
  font-family: inherit;
  background: transparent;
  border: none;
  border-bottom: 1px solid var(--rule-gray);
  outline: none;
}

.field-input:focus {
  border-bottom-color: var(--brand-red);
}

.field-input.field--time {
  color: var(--brand-red);
}

.ticket__detail .field-input {
  text-align: center;
}

/* === Actions === */
.ticket-actions {
  margin-top: 1rem;
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.btn {
  display: flex;
  align-items: center;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.25rem;
  color: var(--paper);
  font-family: inherit;
  font-weight: 700;
  cursor: pointer;
  transition: background-color var(--transition-normal);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-accent {
  background: var(--brand-red);
}

.btn-accent:hover:not(:disabled) {
  background: var(--brand-red-dark);
}

.btn-confirm {
  background: var(--confirm-green);
}

.btn-confirm:hover:not(:disabled) {
  background: var(--confirm-green-dark);
}

.btn-dark {
  background: var(--ink);
}

.btn-dark:hover:not(:disabled) {
  background: var(--dark-hover);
}
"#;

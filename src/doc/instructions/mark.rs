/*!
# `MARK` `GOTO`

## Purpose
Remember a position and head back to it. Extended set only.

## Remarks
Each `GOTO` is one action toward the latest mark: a turn when facing the
wrong way, otherwise a step. Repeat it to arrive. Without a mark `GOTO`
does nothing.

## Example
```text
MARK
LOOP 3
  MOVE
END
LOOP 8
  GOTO
END
```

*/

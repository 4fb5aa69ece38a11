/*!
# `LOOP <count>` ... `END`

## Purpose
Repeat a block a fixed number of times.

## Remarks
The body always runs at least once, so `LOOP 0` behaves like `LOOP 1`.

## Example
```text
LOOP 3
  MOVE
END
```

*/

/*!
# `MOVE`

## Purpose
Step one tile forward.

## Remarks
Nothing happens when the tile ahead is a wall or has no tile at all.
Keys, doors and exits can all be walked onto. Stepping onto an exit, or
onto a door that has been opened, ends the program.

## Example
```text
WHILE FRONT
  MOVE
END
```

*/
